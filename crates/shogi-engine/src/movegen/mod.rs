//! Move generation.
//!
//! Legality is decided square by square from the movement tables in
//! `shogi-core`; the generators here enumerate candidates and keep the ones
//! [`is_legal`] accepts.

mod attacks;
mod execute;
pub mod perft;
mod validate;

use crate::Board;
use shogi_core::{Move, PieceKind, Square};

pub use attacks::{attackers, is_check, is_king_attacked, is_square_attacked};
pub use execute::{make_move, try_make_move};
pub use validate::{is_dead_end, is_legal, is_legal_coords, promotion_allowed, promotion_required};

/// A list of moves with a fixed maximum capacity.
///
/// Counting both promotion choices and every drop, no reachable position
/// comes near this bound, so a fixed-size array avoids heap allocations.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves the list can hold.
    pub const MAX_MOVES: usize = 1024;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if the list holds `m`.
    pub fn contains(&self, m: Move) -> bool {
        self.as_slice().contains(&m)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates every legal move for the side to move: board moves with each
/// permitted promotion choice, then drops in hand order.
pub fn generate_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    generate_board_moves(board, &mut moves);
    generate_drops(board, &mut moves);
    moves
}

fn generate_board_moves(board: &Board, moves: &mut MoveList) {
    let us = board.side_to_move();
    for (from, piece) in board.pieces_of(us) {
        for dir in piece.movements() {
            let mut to = from.shift(dir.dx, dir.dy);
            while let Some(sq) = to {
                for promote in [false, true] {
                    let m = Move::Normal { from, to: sq, promote };
                    if is_legal(board, m) {
                        moves.push(m);
                    }
                }
                if !dir.slides || !board.is_empty(sq) {
                    break;
                }
                to = sq.shift(dir.dx, dir.dy);
            }
        }
    }
}

fn generate_drops(board: &Board, moves: &mut MoveList) {
    let hand = board.hand(board.side_to_move());
    for kind in PieceKind::HAND {
        if hand.count(kind) == 0 {
            continue;
        }
        for to in Square::all() {
            let m = Move::drop(kind, to);
            if is_legal(board, m) {
                moves.push(m);
            }
        }
    }
}

/// Returns every square the piece on `from` may legally move to, with or
/// without promotion. Empty if `from` does not hold a piece of the side to
/// move.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| {
            is_legal(board, Move::normal(from, to)) || is_legal(board, Move::promoting(from, to))
        })
        .collect()
}

/// Returns every square where the side to move may drop `kind`, row by row.
pub fn legal_drop_squares(board: &Board, kind: PieceKind) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(board, Move::drop(kind, to)))
        .collect()
}
