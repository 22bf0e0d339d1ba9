//! Shogi piece representation.

use crate::direction::{self, Direction};
use crate::Player;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fourteen kinds of shogi pieces: eight base kinds and six promoted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Lance = 1,
    Knight = 2,
    Silver = 3,
    Gold = 4,
    Bishop = 5,
    Rook = 6,
    King = 7,
    ProPawn = 8,
    ProLance = 9,
    ProKnight = 10,
    ProSilver = 11,
    Horse = 12,
    Dragon = 13,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 14] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
        PieceKind::ProPawn,
        PieceKind::ProLance,
        PieceKind::ProKnight,
        PieceKind::ProSilver,
        PieceKind::Horse,
        PieceKind::Dragon,
    ];

    /// Kinds that can be held in hand, in the order they are listed.
    pub const HAND: [PieceKind; 7] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
    ];

    /// Returns the index of this kind (0-13).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the slot of this kind in a hand, or `None` for the king and
    /// promoted kinds.
    #[inline]
    pub const fn hand_index(self) -> Option<usize> {
        match self {
            PieceKind::Pawn => Some(0),
            PieceKind::Lance => Some(1),
            PieceKind::Knight => Some(2),
            PieceKind::Silver => Some(3),
            PieceKind::Gold => Some(4),
            PieceKind::Bishop => Some(5),
            PieceKind::Rook => Some(6),
            _ => None,
        }
    }

    /// Returns true for the base kinds that have a promoted form.
    #[inline]
    pub const fn can_promote(self) -> bool {
        matches!(
            self,
            PieceKind::Pawn
                | PieceKind::Lance
                | PieceKind::Knight
                | PieceKind::Silver
                | PieceKind::Bishop
                | PieceKind::Rook
        )
    }

    /// Returns true for promoted kinds.
    #[inline]
    pub const fn is_promoted(self) -> bool {
        matches!(
            self,
            PieceKind::ProPawn
                | PieceKind::ProLance
                | PieceKind::ProKnight
                | PieceKind::ProSilver
                | PieceKind::Horse
                | PieceKind::Dragon
        )
    }

    /// Returns the promoted form. Kinds without one are returned unchanged,
    /// so gate with [`can_promote`](Self::can_promote) to detect a no-op.
    #[inline]
    pub const fn promote(self) -> Self {
        match self {
            PieceKind::Pawn => PieceKind::ProPawn,
            PieceKind::Lance => PieceKind::ProLance,
            PieceKind::Knight => PieceKind::ProKnight,
            PieceKind::Silver => PieceKind::ProSilver,
            PieceKind::Bishop => PieceKind::Horse,
            PieceKind::Rook => PieceKind::Dragon,
            other => other,
        }
    }

    /// Returns the base form. Base kinds are returned unchanged.
    #[inline]
    pub const fn demote(self) -> Self {
        match self {
            PieceKind::ProPawn => PieceKind::Pawn,
            PieceKind::ProLance => PieceKind::Lance,
            PieceKind::ProKnight => PieceKind::Knight,
            PieceKind::ProSilver => PieceKind::Silver,
            PieceKind::Horse => PieceKind::Bishop,
            PieceKind::Dragon => PieceKind::Rook,
            other => other,
        }
    }

    /// Returns the movement table for this kind, as seen by the first player.
    #[inline]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            PieceKind::Pawn => &direction::PAWN,
            PieceKind::Lance => &direction::LANCE,
            PieceKind::Knight => &direction::KNIGHT,
            PieceKind::Silver => &direction::SILVER,
            PieceKind::Gold => &direction::GOLD,
            PieceKind::Bishop => &direction::BISHOP,
            PieceKind::Rook => &direction::ROOK,
            PieceKind::King => &direction::KING,
            PieceKind::ProPawn
            | PieceKind::ProLance
            | PieceKind::ProKnight
            | PieceKind::ProSilver => &direction::GOLD,
            PieceKind::Horse => &direction::HORSE,
            PieceKind::Dragon => &direction::DRAGON,
        }
    }

    /// Returns the short ASCII symbol (`P`, `+P`, ...).
    pub const fn symbol(self) -> &'static str {
        match self {
            PieceKind::Pawn => "P",
            PieceKind::Lance => "L",
            PieceKind::Knight => "N",
            PieceKind::Silver => "S",
            PieceKind::Gold => "G",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::King => "K",
            PieceKind::ProPawn => "+P",
            PieceKind::ProLance => "+L",
            PieceKind::ProKnight => "+N",
            PieceKind::ProSilver => "+S",
            PieceKind::Horse => "+B",
            PieceKind::Dragon => "+R",
        }
    }

    /// Parses a base-kind letter (case-insensitive).
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'L' => Some(PieceKind::Lance),
            'N' => Some(PieceKind::Knight),
            'S' => Some(PieceKind::Silver),
            'G' => Some(PieceKind::Gold),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns the single-character kanji used on the board.
    ///
    /// The king is drawn differently for each player, see [`Piece::kanji`].
    pub const fn kanji(self) -> char {
        match self {
            PieceKind::Pawn => '歩',
            PieceKind::Lance => '香',
            PieceKind::Knight => '桂',
            PieceKind::Silver => '銀',
            PieceKind::Gold => '金',
            PieceKind::Bishop => '角',
            PieceKind::Rook => '飛',
            PieceKind::King => '王',
            PieceKind::ProPawn => 'と',
            PieceKind::ProLance => '杏',
            PieceKind::ProKnight => '圭',
            PieceKind::ProSilver => '全',
            PieceKind::Horse => '馬',
            PieceKind::Dragon => '龍',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Lance => "Lance",
            PieceKind::Knight => "Knight",
            PieceKind::Silver => "Silver",
            PieceKind::Gold => "Gold",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::King => "King",
            PieceKind::ProPawn => "Promoted Pawn",
            PieceKind::ProLance => "Promoted Lance",
            PieceKind::ProKnight => "Promoted Knight",
            PieceKind::ProSilver => "Promoted Silver",
            PieceKind::Horse => "Horse",
            PieceKind::Dragon => "Dragon",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a piece letter cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown piece kind: {0:?}")]
pub struct ParseKindError(pub String);

impl FromStr for PieceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| ParseKindError(s.to_string())),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// A piece on the board: a kind and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    /// Creates a new piece.
    #[inline]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Piece { kind, owner }
    }

    /// Returns the movement directions of this piece, oriented for its owner.
    pub fn movements(self) -> impl Iterator<Item = Direction> {
        let owner = self.owner;
        self.kind.directions().iter().map(move |d| d.oriented(owner))
    }

    /// Returns the kanji drawn for this piece. The first player's king is
    /// drawn as 玉 and the second player's as 王.
    pub const fn kanji(self) -> char {
        match (self.kind, self.owner) {
            (PieceKind::King, Player::First) => '玉',
            (kind, _) => kind.kanji(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kanji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_promote() {
        let promotable: Vec<_> = PieceKind::ALL
            .iter()
            .copied()
            .filter(|k| k.can_promote())
            .collect();
        assert_eq!(
            promotable,
            vec![
                PieceKind::Pawn,
                PieceKind::Lance,
                PieceKind::Knight,
                PieceKind::Silver,
                PieceKind::Bishop,
                PieceKind::Rook,
            ]
        );
        assert!(!PieceKind::Gold.can_promote());
        assert!(!PieceKind::King.can_promote());
        assert!(!PieceKind::Dragon.can_promote());
    }

    #[test]
    fn promote_demote_bijection() {
        for kind in PieceKind::ALL {
            if kind.can_promote() {
                let promoted = kind.promote();
                assert_ne!(promoted, kind);
                assert!(promoted.is_promoted());
                assert_eq!(promoted.demote(), kind);
            } else {
                assert_eq!(kind.promote(), kind);
            }
        }
    }

    #[test]
    fn demote_is_identity_on_base_kinds() {
        assert_eq!(PieceKind::Pawn.demote(), PieceKind::Pawn);
        assert_eq!(PieceKind::Gold.demote(), PieceKind::Gold);
        assert_eq!(PieceKind::King.demote(), PieceKind::King);
        assert_eq!(PieceKind::Horse.demote(), PieceKind::Bishop);
        assert_eq!(PieceKind::Dragon.demote(), PieceKind::Rook);
    }

    #[test]
    fn hand_index_follows_hand_order() {
        for (i, kind) in PieceKind::HAND.iter().enumerate() {
            assert_eq!(kind.hand_index(), Some(i));
        }
        assert_eq!(PieceKind::King.hand_index(), None);
        assert_eq!(PieceKind::ProPawn.hand_index(), None);
    }

    #[test]
    fn parse_kind() {
        assert_eq!("P".parse::<PieceKind>(), Ok(PieceKind::Pawn));
        assert_eq!("r".parse::<PieceKind>(), Ok(PieceKind::Rook));
        assert!("X".parse::<PieceKind>().is_err());
        assert!("PP".parse::<PieceKind>().is_err());
        assert!("".parse::<PieceKind>().is_err());
    }

    #[test]
    fn kanji() {
        assert_eq!(Piece::new(PieceKind::King, Player::First).kanji(), '玉');
        assert_eq!(Piece::new(PieceKind::King, Player::Second).kanji(), '王');
        assert_eq!(Piece::new(PieceKind::Dragon, Player::Second).to_string(), "龍");
    }

    #[test]
    fn second_player_movements_are_flipped() {
        let first: Vec<_> = Piece::new(PieceKind::Silver, Player::First)
            .movements()
            .collect();
        let second: Vec<_> = Piece::new(PieceKind::Silver, Player::Second)
            .movements()
            .collect();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.dx, b.dx);
            assert_eq!(a.dy, -b.dy);
            assert_eq!(a.slides, b.slides);
        }
    }
}
