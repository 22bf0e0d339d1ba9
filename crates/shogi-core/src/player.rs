//! Player representation.

use crate::BOARD_SIZE;

/// Represents the two players in shogi.
///
/// `First` (sente) moves first and starts on the bottom rows (6-8);
/// `Second` (gote) starts on the top rows (0-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Returns the opposing player.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the index (0 for First, 1 for Second).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of one step forward (-1 for First, +1 for Second).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::First => -1,
            Player::Second => 1,
        }
    }

    /// Returns how many rows `row` lies from this player's farthest row.
    ///
    /// The farthest row itself is 0, the one behind it 1, and so on.
    /// `row` must be below [`BOARD_SIZE`]; rows past the board count as the
    /// farthest row for Second.
    #[inline]
    pub const fn distance_to_far_edge(self, row: u8) -> u8 {
        debug_assert!(row < BOARD_SIZE);
        match self {
            Player::First => row,
            Player::Second => (BOARD_SIZE - 1).saturating_sub(row),
        }
    }

    /// Returns true if `row` is inside this player's promotion zone
    /// (the three farthest rows).
    #[inline]
    pub const fn in_promotion_zone(self, row: u8) -> bool {
        self.distance_to_far_edge(row) < 3
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "First"),
            Player::Second => write!(f, "Second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_player() {
        assert_eq!(Player::First.opposite(), Player::Second);
        assert_eq!(Player::Second.opposite(), Player::First);
    }

    #[test]
    fn player_index() {
        assert_eq!(Player::First.index(), 0);
        assert_eq!(Player::Second.index(), 1);
    }

    #[test]
    fn forward() {
        assert_eq!(Player::First.forward(), -1);
        assert_eq!(Player::Second.forward(), 1);
    }

    #[test]
    fn far_edge_distance() {
        assert_eq!(Player::First.distance_to_far_edge(0), 0);
        assert_eq!(Player::First.distance_to_far_edge(8), 8);
        assert_eq!(Player::Second.distance_to_far_edge(8), 0);
        assert_eq!(Player::Second.distance_to_far_edge(7), 1);
        assert_eq!(Player::Second.distance_to_far_edge(0), 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn far_edge_distance_rejects_rows_off_the_board() {
        Player::Second.distance_to_far_edge(BOARD_SIZE);
    }

    #[test]
    fn promotion_zone() {
        assert!(Player::First.in_promotion_zone(0));
        assert!(Player::First.in_promotion_zone(2));
        assert!(!Player::First.in_promotion_zone(3));
        assert!(Player::Second.in_promotion_zone(6));
        assert!(Player::Second.in_promotion_zone(8));
        assert!(!Player::Second.in_promotion_zone(5));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::First), "First");
        assert_eq!(format!("{}", Player::Second), "Second");
    }
}
