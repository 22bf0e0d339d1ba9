//! Board square representation.

use crate::BOARD_SIZE;
use std::fmt;

/// A square on the 9×9 board, indexed 0-80.
///
/// Squares are addressed by `(col, row)` with `(0, 0)` in the top-left corner
/// as seen by the first player. The index is `row * 9 + col`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// The top-left square `(0, 0)`.
    pub const ORIGIN: Square = Square(0);

    /// Creates a square from column and row, both in `0..9`.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, as received from a caller
    /// that may pass anything.
    #[inline]
    pub fn from_coords(x: i32, y: i32) -> Option<Self> {
        let col = u8::try_from(x).ok()?;
        let row = u8::try_from(y).ok()?;
        Self::new(col, row)
    }

    /// Creates a square from index (0-80).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the index (0-80).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the column (0-8).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns the row (0-8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the square shifted by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub fn shift(self, dx: i8, dy: i8) -> Option<Self> {
        Self::from_coords(
            i32::from(self.col()) + i32::from(dx),
            i32::from(self.row()) + i32::from(dy),
        )
    }

    /// Iterates over all squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Returns the displacement `(dx, dy)` from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.col() as i8 - self.col() as i8,
            other.row() as i8 - self.row() as i8,
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.col(), self.row())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col(), self.row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        for col in 0..9 {
            for row in 0..9 {
                let sq = Square::new(col, row).unwrap();
                assert_eq!(sq.col(), col);
                assert_eq!(sq.row(), row);
            }
        }
        assert_eq!(Square::new(9, 0), None);
        assert_eq!(Square::new(0, 9), None);
    }

    #[test]
    fn square_from_coords() {
        assert_eq!(Square::from_coords(4, 4), Square::new(4, 4));
        assert_eq!(Square::from_coords(-1, -1), None);
        assert_eq!(Square::from_coords(0, 9), None);
        assert_eq!(Square::from_coords(300, 0), None);
    }

    #[test]
    fn square_index() {
        assert_eq!(Square::new(0, 0).unwrap().index(), 0);
        assert_eq!(Square::new(8, 0).unwrap().index(), 8);
        assert_eq!(Square::new(0, 1).unwrap().index(), 9);
        assert_eq!(Square::new(8, 8).unwrap().index(), 80);
        assert_eq!(Square::from_index(81), None);
    }

    #[test]
    fn square_shift() {
        let sq = Square::new(4, 4).unwrap();
        assert_eq!(sq.shift(-4, -4), Square::new(0, 0));
        assert_eq!(sq.shift(4, 4), Square::new(8, 8));
        assert_eq!(sq.shift(5, 0), None);
        assert_eq!(sq.shift(0, -5), None);
    }

    #[test]
    fn square_all() {
        let all: Vec<_> = Square::all().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(all[10], Square::new(1, 1).unwrap());
    }

    #[test]
    fn square_delta() {
        let a = Square::new(2, 6).unwrap();
        let b = Square::new(3, 4).unwrap();
        assert_eq!(a.delta_to(b), (1, -2));
        assert_eq!(b.delta_to(a), (-1, 2));
    }

    #[test]
    fn square_display() {
        let sq = Square::new(2, 6).unwrap();
        assert_eq!(sq.to_string(), "(2,6)");
        assert_eq!(format!("{:?}", sq), "Square(2, 6)");
    }

    proptest! {
        #[test]
        fn from_coords_accepts_exactly_the_board(x in -20i32..20, y in -20i32..20) {
            let on_board = (0..9).contains(&x) && (0..9).contains(&y);
            let sq = Square::from_coords(x, y);
            prop_assert_eq!(sq.is_some(), on_board);
            if let Some(sq) = sq {
                prop_assert_eq!(i32::from(sq.col()), x);
                prop_assert_eq!(i32::from(sq.row()), y);
            }
        }

        #[test]
        fn shift_then_delta_is_identity(index in 0u8..81, dx in -8i8..=8, dy in -8i8..=8) {
            let sq = Square::from_index(index).unwrap();
            if let Some(target) = sq.shift(dx, dy) {
                prop_assert_eq!(sq.delta_to(target), (dx, dy));
            }
        }
    }
}
