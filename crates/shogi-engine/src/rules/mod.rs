//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait. The [`Game`](crate::Game)
//! session delegates every board-level decision to the active rule set.

mod standard;

pub use standard::StandardShogi;

use crate::{Board, MoveList};
use shogi_core::{Move, Piece, PieceKind, Player, Square};
use thiserror::Error;

/// Errors raised by the engine when a caller breaks a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// A move left `checked` in check and the session ends games on check.
    Check { checked: Player },
    /// `winner` captured the opposing king.
    KingCaptured { winner: Player },
}

impl GameEnd {
    /// Returns the player credited with the win.
    pub fn winner(self) -> Player {
        match self {
            GameEnd::Check { checked } => checked.opposite(),
            GameEnd::KingCaptured { winner } => winner,
        }
    }
}

/// Trait for the rules a game is played under.
///
/// # Example
///
/// ```
/// use shogi_engine::{RuleSet, StandardShogi};
///
/// let board = StandardShogi.initial_board();
/// let moves = StandardShogi.legal_moves(&board);
/// assert_eq!(moves.len(), 30);
/// ```
pub trait RuleSet {
    /// Returns the starting board.
    fn initial_board(&self) -> Board;

    /// Returns true if `m` is legal for the side to move.
    fn is_legal(&self, board: &Board, m: Move) -> bool;

    /// Applies `m` to the board and returns the captured piece, if any.
    ///
    /// # Panics
    ///
    /// May panic if the move is not legal. Use [`is_legal`](RuleSet::is_legal)
    /// to check first, or use [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, board: &mut Board, m: Move) -> Option<Piece>;

    /// Applies `m` if it is legal; otherwise leaves the board untouched.
    fn try_make_move(&self, board: &mut Board, m: Move) -> Result<Option<Piece>, EngineError> {
        if self.is_legal(board, m) {
            Ok(self.make_move(board, m))
        } else {
            Err(EngineError::IllegalMove(m))
        }
    }

    /// Returns true if the side to move is in check.
    fn is_check(&self, board: &Board) -> bool;

    /// Generates every legal move for the side to move.
    fn legal_moves(&self, board: &Board) -> MoveList;

    /// Returns the squares where the side to move may drop `kind`.
    fn legal_drop_squares(&self, board: &Board, kind: PieceKind) -> Vec<Square>;

    /// Returns the outcome decided by the board alone, if any.
    fn game_end(&self, board: &Board) -> Option<GameEnd>;
}
