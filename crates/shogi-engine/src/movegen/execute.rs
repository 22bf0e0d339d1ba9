//! Move execution.

use super::validate::is_legal;
use crate::rules::EngineError;
use crate::Board;
use shogi_core::{Move, Piece};

/// Applies a legal move to the board and passes the turn.
///
/// Returns the piece that stood on the destination, as it was before the
/// capture. Its base kind has been added to the mover's hand unless it was
/// a king.
///
/// # Panics
///
/// In debug builds, panics if `m` is not legal. Use [`try_make_move`] for
/// unchecked input.
pub fn make_move(board: &mut Board, m: Move) -> Option<Piece> {
    debug_assert!(is_legal(board, m), "illegal move {}", m);
    let us = board.side_to_move();

    let captured = match m {
        Move::Drop { to, kind } => {
            board.hand_mut(us).take(kind);
            board.put(to, Piece::new(kind, us));
            None
        }
        Move::Normal { from, to, promote } => {
            let captured = board.remove(to);
            if let Some(victim) = captured {
                board.hand_mut(us).add(victim.kind.demote());
            }
            if let Some(mut piece) = board.remove(from) {
                if promote {
                    piece.kind = piece.kind.promote();
                }
                board.put(to, piece);
            }
            captured
        }
    };

    board.switch_side();
    captured
}

/// Applies `m` if it is legal, leaving the board untouched otherwise.
pub fn try_make_move(board: &mut Board, m: Move) -> Result<Option<Piece>, EngineError> {
    if !is_legal(board, m) {
        tracing::debug!(%m, "rejected illegal move");
        return Err(EngineError::IllegalMove(m));
    }
    Ok(make_move(board, m))
}
