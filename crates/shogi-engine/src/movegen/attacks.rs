//! Check detection.
//!
//! An attack is a board move the attacker could make if it were their turn,
//! with promotion requirements ignored. Nothing here touches the board's
//! side to move.

use super::validate::can_reach;
use crate::Board;
use shogi_core::{Player, Square};

/// Returns true if the side to move has its king attacked.
pub fn is_check(board: &Board) -> bool {
    is_king_attacked(board, board.side_to_move())
}

/// Returns true if `player`'s king is attacked. A missing king is never
/// attacked.
pub fn is_king_attacked(board: &Board, player: Player) -> bool {
    board
        .find_king(player)
        .is_some_and(|king| is_square_attacked(board, king, player.opposite()))
}

/// Returns true if any piece of `by` can move to `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Player) -> bool {
    attackers(board, sq, by).next().is_some()
}

/// Iterates over the squares of `by`'s pieces that can move to `sq`.
pub fn attackers(board: &Board, sq: Square, by: Player) -> impl Iterator<Item = Square> + '_ {
    board
        .pieces_of(by)
        .filter(move |&(from, piece)| can_reach(board, piece, from, sq))
        .map(|(from, _)| from)
}
