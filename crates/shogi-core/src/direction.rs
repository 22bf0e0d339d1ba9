//! Piece movement tables.
//!
//! Every table is written from the first player's point of view, where
//! "forward" is `dy = -1`. The second player's directions are derived on
//! demand with [`Direction::oriented`], which negates `dy`.

use crate::Player;

/// A single movement direction of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Column delta of one step.
    pub dx: i8,
    /// Row delta of one step.
    pub dy: i8,
    /// The step may be repeated across empty squares until blocked.
    pub slides: bool,
    /// The step exists only because the piece is promoted
    /// (the king-like steps of the horse and dragon).
    pub promoted_only: bool,
}

impl Direction {
    /// A single step.
    pub const fn step(dx: i8, dy: i8) -> Self {
        Direction {
            dx,
            dy,
            slides: false,
            promoted_only: false,
        }
    }

    /// A step that may be repeated.
    pub const fn slide(dx: i8, dy: i8) -> Self {
        Direction {
            dx,
            dy,
            slides: true,
            promoted_only: false,
        }
    }

    /// A single step granted by promotion.
    pub const fn promoted_step(dx: i8, dy: i8) -> Self {
        Direction {
            dx,
            dy,
            slides: false,
            promoted_only: true,
        }
    }

    /// Returns this direction as seen by `player`.
    #[inline]
    pub const fn oriented(self, player: Player) -> Self {
        Direction {
            dy: -self.dy * player.forward(),
            ..self
        }
    }

    /// Returns how many steps along this direction cover the displacement
    /// `(dx, dy)`, or `None` if the displacement is not reachable this way.
    ///
    /// A non-sliding direction reaches only its literal offset (this is how
    /// the knight's two-row jump is matched). A sliding direction reaches any
    /// positive multiple of its unit step: the per-axis signs must agree and
    /// diagonal displacements must have equal magnitudes.
    pub fn steps_to(self, dx: i8, dy: i8) -> Option<u8> {
        if !self.slides {
            return (dx == self.dx && dy == self.dy).then_some(1);
        }
        if dx.signum() != self.dx || dy.signum() != self.dy {
            return None;
        }
        let n = match (dx, dy) {
            (0, 0) => return None,
            (0, dy) => dy.unsigned_abs(),
            (dx, 0) => dx.unsigned_abs(),
            (dx, dy) if dx.unsigned_abs() == dy.unsigned_abs() => dx.unsigned_abs(),
            _ => return None,
        };
        Some(n)
    }
}

/// Pawn movement: one step forward.
pub const PAWN: [Direction; 1] = [Direction::step(0, -1)];

/// Lance movement: any distance straight forward.
pub const LANCE: [Direction; 1] = [Direction::slide(0, -1)];

/// Knight movement: the two forward jumps, which pass over any piece.
pub const KNIGHT: [Direction; 2] = [Direction::step(-1, -2), Direction::step(1, -2)];

/// Silver movement: the three forward squares and both rear diagonals.
pub const SILVER: [Direction; 5] = [
    Direction::step(-1, -1),
    Direction::step(0, -1),
    Direction::step(1, -1),
    Direction::step(-1, 1),
    Direction::step(1, 1),
];

/// Gold movement, shared by the promoted pawn, lance, knight and silver.
pub const GOLD: [Direction; 6] = [
    Direction::step(-1, -1),
    Direction::step(0, -1),
    Direction::step(1, -1),
    Direction::step(-1, 0),
    Direction::step(1, 0),
    Direction::step(0, 1),
];

/// Bishop movement: any distance along the diagonals.
pub const BISHOP: [Direction; 4] = [
    Direction::slide(-1, -1),
    Direction::slide(1, -1),
    Direction::slide(-1, 1),
    Direction::slide(1, 1),
];

/// Rook movement: any distance along the rank or file.
pub const ROOK: [Direction; 4] = [
    Direction::slide(0, -1),
    Direction::slide(-1, 0),
    Direction::slide(1, 0),
    Direction::slide(0, 1),
];

/// King movement: one step in any direction.
pub const KING: [Direction; 8] = [
    Direction::step(-1, -1),
    Direction::step(0, -1),
    Direction::step(1, -1),
    Direction::step(-1, 0),
    Direction::step(1, 0),
    Direction::step(-1, 1),
    Direction::step(0, 1),
    Direction::step(1, 1),
];

/// Promoted bishop: bishop slides plus one orthogonal step.
pub const HORSE: [Direction; 8] = [
    Direction::slide(-1, -1),
    Direction::slide(1, -1),
    Direction::slide(-1, 1),
    Direction::slide(1, 1),
    Direction::promoted_step(0, -1),
    Direction::promoted_step(-1, 0),
    Direction::promoted_step(1, 0),
    Direction::promoted_step(0, 1),
];

/// Promoted rook: rook slides plus one diagonal step.
pub const DRAGON: [Direction; 8] = [
    Direction::slide(0, -1),
    Direction::slide(-1, 0),
    Direction::slide(1, 0),
    Direction::slide(0, 1),
    Direction::promoted_step(-1, -1),
    Direction::promoted_step(1, -1),
    Direction::promoted_step(-1, 1),
    Direction::promoted_step(1, 1),
];
