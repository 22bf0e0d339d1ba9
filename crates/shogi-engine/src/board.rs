//! Shogi board state.

use crate::Hand;
use shogi_core::{Piece, PieceKind, Player, Square, BOARD_SIZE};
use std::fmt;

/// Back row from the left, as seen by either player.
const BACK_ROW: [PieceKind; 9] = [
    PieceKind::Lance,
    PieceKind::Knight,
    PieceKind::Silver,
    PieceKind::Gold,
    PieceKind::King,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
];

/// Complete board state: the grid, both hands and the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [Option<Piece>; Square::COUNT],
    hands: [Hand; 2],
    side_to_move: Player,
}

impl Board {
    /// Creates the standard starting position with the first player to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let last = BOARD_SIZE - 1;

        for (col, &kind) in (0u8..).zip(BACK_ROW.iter()) {
            board.place(col, last, kind, Player::First);
            board.place(col, 0, kind, Player::Second);
            board.place(col, last - 2, PieceKind::Pawn, Player::First);
            board.place(col, 2, PieceKind::Pawn, Player::Second);
        }

        board.place(1, last - 1, PieceKind::Bishop, Player::First);
        board.place(7, last - 1, PieceKind::Rook, Player::First);
        board.place(1, 1, PieceKind::Rook, Player::Second);
        board.place(7, 1, PieceKind::Bishop, Player::Second);

        board
    }

    /// Creates a board with no pieces, empty hands and the first player to move.
    pub fn empty() -> Self {
        Board {
            grid: [None; Square::COUNT],
            hands: [Hand::EMPTY; 2],
            side_to_move: Player::First,
        }
    }

    fn place(&mut self, col: u8, row: u8, kind: PieceKind, owner: Player) {
        if let Some(sq) = Square::new(col, row) {
            self.put(sq, Piece::new(kind, owner));
        }
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    /// Returns true if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_none()
    }

    /// Places `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.index()] = Some(piece);
    }

    /// Removes and returns the piece on `sq`.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()].take()
    }

    /// Returns the player to move.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Sets the player to move.
    #[inline]
    pub fn set_side_to_move(&mut self, player: Player) {
        self.side_to_move = player;
    }

    /// Passes the turn to the other player.
    #[inline]
    pub(crate) fn switch_side(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Returns the hand of `player`.
    #[inline]
    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the hand of `player` for modification.
    #[inline]
    pub fn hand_mut(&mut self, player: Player) -> &mut Hand {
        &mut self.hands[player.index()]
    }

    /// Returns the pieces `player` holds in hand, in hand order, each kind
    /// repeated by its count.
    pub fn captured_pieces(&self, player: Player) -> Vec<PieceKind> {
        self.hand(player).pieces().collect()
    }

    /// Iterates over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares occupied by `player`.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == player)
    }

    /// Returns the square of `player`'s king, if it is on the board.
    pub fn find_king(&self, player: Player) -> Option<Square> {
        self.pieces_of(player)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Returns true if `player` has an unpromoted pawn in column `col`.
    pub fn has_pawn_in_column(&self, player: Player, col: u8) -> bool {
        (0..BOARD_SIZE)
            .filter_map(|row| Square::new(col, row))
            .filter_map(|sq| self.piece_at(sq))
            .any(|p| p.kind == PieceKind::Pawn && p.owner == player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid as kanji, one row per line, with the second player's
/// pieces prefixed by `v`, followed by both hands.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match Square::new(col, row).and_then(|sq| self.piece_at(sq)) {
                    Some(p) if p.owner == Player::Second => write!(f, "v{}", p)?,
                    Some(p) => write!(f, " {}", p)?,
                    None => write!(f, " ・")?,
                }
            }
            writeln!(f)?;
        }
        for player in Player::ALL {
            write!(f, "{}:", player)?;
            for kind in self.hand(player).pieces() {
                write!(f, " {}", kind.kanji())?;
            }
            writeln!(f)?;
        }
        write!(f, "to move: {}", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: u8, row: u8) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn startpos_layout() {
        let board = Board::new();
        assert_eq!(board.side_to_move(), Player::First);
        assert_eq!(
            board.piece_at(sq(4, 8)),
            Some(Piece::new(PieceKind::King, Player::First))
        );
        assert_eq!(
            board.piece_at(sq(4, 0)),
            Some(Piece::new(PieceKind::King, Player::Second))
        );
        assert_eq!(
            board.piece_at(sq(1, 7)),
            Some(Piece::new(PieceKind::Bishop, Player::First))
        );
        assert_eq!(
            board.piece_at(sq(7, 7)),
            Some(Piece::new(PieceKind::Rook, Player::First))
        );
        assert_eq!(
            board.piece_at(sq(1, 1)),
            Some(Piece::new(PieceKind::Rook, Player::Second))
        );
        assert_eq!(
            board.piece_at(sq(7, 1)),
            Some(Piece::new(PieceKind::Bishop, Player::Second))
        );
        for col in 0..9 {
            assert_eq!(
                board.piece_at(sq(col, 6)),
                Some(Piece::new(PieceKind::Pawn, Player::First))
            );
            assert_eq!(
                board.piece_at(sq(col, 2)),
                Some(Piece::new(PieceKind::Pawn, Player::Second))
            );
            for row in 3..6 {
                assert!(board.is_empty(sq(col, row)));
            }
        }
    }

    #[test]
    fn startpos_counts() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 40);
        assert_eq!(board.pieces_of(Player::First).count(), 20);
        assert_eq!(board.pieces_of(Player::Second).count(), 20);
        assert!(board.hand(Player::First).is_empty());
        assert!(board.hand(Player::Second).is_empty());
        assert!(board.captured_pieces(Player::First).is_empty());
    }

    #[test]
    fn startpos_is_mirrored() {
        let board = Board::new();
        for (square, piece) in board.pieces() {
            let mirror = sq(8 - square.col(), 8 - square.row());
            let other = board.piece_at(mirror).unwrap();
            assert_eq!(other.kind, piece.kind);
            assert_eq!(other.owner, piece.owner.opposite());
        }
    }

    #[test]
    fn put_and_remove() {
        let mut board = Board::empty();
        let gold = Piece::new(PieceKind::Gold, Player::Second);
        board.put(sq(3, 3), gold);
        assert_eq!(board.piece_at(sq(3, 3)), Some(gold));
        assert_eq!(board.remove(sq(3, 3)), Some(gold));
        assert!(board.is_empty(sq(3, 3)));
        assert_eq!(board.remove(sq(3, 3)), None);
    }

    #[test]
    fn find_king() {
        let board = Board::new();
        assert_eq!(board.find_king(Player::First), Some(sq(4, 8)));
        assert_eq!(board.find_king(Player::Second), Some(sq(4, 0)));
        assert_eq!(Board::empty().find_king(Player::First), None);
    }

    #[test]
    fn pawn_in_column() {
        let mut board = Board::empty();
        board.put(sq(3, 5), Piece::new(PieceKind::Pawn, Player::First));
        board.put(sq(4, 5), Piece::new(PieceKind::ProPawn, Player::First));
        assert!(board.has_pawn_in_column(Player::First, 3));
        assert!(!board.has_pawn_in_column(Player::Second, 3));
        assert!(!board.has_pawn_in_column(Player::First, 4));
    }

    #[test]
    fn captured_pieces_order() {
        let mut board = Board::empty();
        board.hand_mut(Player::Second).add(PieceKind::Bishop);
        board.hand_mut(Player::Second).add(PieceKind::Pawn);
        board.hand_mut(Player::Second).add(PieceKind::Silver);
        assert_eq!(
            board.captured_pieces(Player::Second),
            vec![PieceKind::Pawn, PieceKind::Silver, PieceKind::Bishop]
        );
        assert!(board.captured_pieces(Player::First).is_empty());
    }

    #[test]
    fn display_startpos() {
        let text = Board::new().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "v香v桂v銀v金v王v金v銀v桂v香");
        assert_eq!(lines[8], " 香 桂 銀 金 玉 金 銀 桂 香");
        assert_eq!(lines[11], "to move: First");
    }
}
