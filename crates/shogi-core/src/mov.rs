//! Move representation.

use crate::{PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building a move from raw coordinates.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OffBoard { x: i32, y: i32 },

    #[error("a drop must name the piece kind being dropped")]
    MissingDropKind,
}

/// A shogi move: either a piece moving on the board or a piece dropped from
/// the hand.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// A piece moves from `from` to `to`, optionally promoting.
    Normal {
        from: Square,
        to: Square,
        promote: bool,
    },
    /// A piece of `kind` is taken from the hand and placed on `to`.
    Drop { to: Square, kind: PieceKind },
}

impl Move {
    /// The raw source coordinate that marks a drop.
    pub const NO_SOURCE: (i32, i32) = (-1, -1);

    /// A placeholder move that is never legal (source equals destination).
    pub const NULL: Move = Move::Normal {
        from: Square::ORIGIN,
        to: Square::ORIGIN,
        promote: false,
    };

    /// Creates a board move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::Normal {
            from,
            to,
            promote: false,
        }
    }

    /// Creates a board move that promotes the moving piece.
    #[inline]
    pub const fn promoting(from: Square, to: Square) -> Self {
        Move::Normal {
            from,
            to,
            promote: true,
        }
    }

    /// Creates a drop.
    #[inline]
    pub const fn drop(kind: PieceKind, to: Square) -> Self {
        Move::Drop { to, kind }
    }

    /// Builds a move from raw coordinates.
    ///
    /// A source of [`Move::NO_SOURCE`] means a drop of `drop_kind`; the
    /// promotion flag is ignored for drops. Every other coordinate must lie
    /// on the board.
    pub fn from_coords(
        from: (i32, i32),
        to: (i32, i32),
        drop_kind: Option<PieceKind>,
        promote: bool,
    ) -> Result<Self, MoveError> {
        let to = Square::from_coords(to.0, to.1).ok_or(MoveError::OffBoard { x: to.0, y: to.1 })?;
        if from == Self::NO_SOURCE {
            let kind = drop_kind.ok_or(MoveError::MissingDropKind)?;
            return Ok(Move::Drop { to, kind });
        }
        let from = Square::from_coords(from.0, from.1).ok_or(MoveError::OffBoard {
            x: from.0,
            y: from.1,
        })?;
        Ok(Move::Normal { from, to, promote })
    }

    /// Returns the source square, or `None` for a drop.
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// Returns true if this is a drop.
    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    /// Returns true if this board move requests promotion.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Normal { promote: true, .. })
    }

    /// Returns the same move with the promotion flag set to `promote`.
    /// Drops are returned unchanged.
    #[inline]
    pub const fn with_promotion(self, promote: bool) -> Self {
        match self {
            Move::Normal { from, to, .. } => Move::Normal { from, to, promote },
            drop => drop,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal { from, to, promote } => {
                write!(f, "{}-{}", from, to)?;
                if *promote {
                    write!(f, "+")?;
                }
                Ok(())
            }
            Move::Drop { to, kind } => write!(f, "{}*{}", kind.symbol(), to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: u8, row: u8) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn move_accessors() {
        let m = Move::normal(sq(2, 6), sq(2, 5));
        assert_eq!(m.from(), Some(sq(2, 6)));
        assert_eq!(m.to(), sq(2, 5));
        assert!(!m.is_drop());
        assert!(!m.is_promotion());

        let d = Move::drop(PieceKind::Pawn, sq(4, 4));
        assert_eq!(d.from(), None);
        assert_eq!(d.to(), sq(4, 4));
        assert!(d.is_drop());
        assert!(!d.is_promotion());
    }

    #[test]
    fn from_coords_board_move() {
        let m = Move::from_coords((2, 3), (2, 2), None, true).unwrap();
        assert_eq!(m, Move::promoting(sq(2, 3), sq(2, 2)));
    }

    #[test]
    fn from_coords_drop() {
        let m = Move::from_coords(Move::NO_SOURCE, (4, 4), Some(PieceKind::Gold), true).unwrap();
        assert_eq!(m, Move::drop(PieceKind::Gold, sq(4, 4)));
        assert_eq!(
            Move::from_coords(Move::NO_SOURCE, (4, 4), None, false),
            Err(MoveError::MissingDropKind)
        );
    }

    #[test]
    fn from_coords_off_board() {
        assert_eq!(
            Move::from_coords((0, 0), (9, 0), None, false),
            Err(MoveError::OffBoard { x: 9, y: 0 })
        );
        assert_eq!(
            Move::from_coords((-1, 3), (0, 0), None, false),
            Err(MoveError::OffBoard { x: -1, y: 3 })
        );
        assert_eq!(
            Move::from_coords(Move::NO_SOURCE, (0, -2), Some(PieceKind::Pawn), false),
            Err(MoveError::OffBoard { x: 0, y: -2 })
        );
    }

    #[test]
    fn with_promotion() {
        let m = Move::normal(sq(1, 1), sq(1, 0));
        assert!(m.with_promotion(true).is_promotion());
        let d = Move::drop(PieceKind::Pawn, sq(1, 1));
        assert_eq!(d.with_promotion(true), d);
    }

    #[test]
    fn move_display() {
        assert_eq!(Move::normal(sq(2, 6), sq(2, 5)).to_string(), "(2,6)-(2,5)");
        assert_eq!(Move::promoting(sq(2, 3), sq(2, 2)).to_string(), "(2,3)-(2,2)+");
        assert_eq!(Move::drop(PieceKind::Knight, sq(0, 5)).to_string(), "N*(0,5)");
        assert_eq!(format!("{:?}", Move::drop(PieceKind::Pawn, sq(0, 0))), "Move(P*(0,0))");
    }

    #[test]
    fn null_move_goes_nowhere() {
        assert_eq!(Move::NULL.from(), Some(Move::NULL.to()));
    }
}
