//! Game session over a single board.
//!
//! The [`Game`] struct wraps a [`Board`] with the policies a playing
//! front end needs:
//! - Automatic promotion whenever promotion is allowed
//! - Ending the game on check, or on capture of a king
//! - Move history with captures

use crate::movegen::legal_destinations;
use crate::rules::{EngineError, GameEnd, RuleSet, StandardShogi};
use crate::{Board, MoveList};
use shogi_core::{Move, MoveError, Piece, PieceKind, Player, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal on the current board.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// Raw coordinates did not describe a move.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

impl From<EngineError> for GameError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::IllegalMove(m) => GameError::IllegalMove(m),
        }
    }
}

/// Session policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Promote every move that is allowed to promote, whatever the caller
    /// asked for.
    pub auto_promote: bool,
    /// End the game as soon as a move gives check.
    pub end_on_check: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            auto_promote: true,
            end_on_check: true,
        }
    }
}

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The game ended; further moves are rejected.
    Over(GameEnd),
}

/// The outcome of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// The move as applied, after automatic promotion.
    pub mov: Move,
    /// The piece removed from the destination, in its pre-capture form.
    pub captured: Option<Piece>,
    /// Whether the player now to move is in check.
    pub check: bool,
}

/// A shogi game with history tracking.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    start: Board,
    options: GameOptions,
    history: Vec<MoveReport>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

impl Game {
    /// Creates a new game from the standard starting board.
    pub fn new(options: GameOptions) -> Self {
        Self::from_board(StandardShogi.initial_board(), options)
    }

    /// Creates a game from a custom starting board.
    pub fn from_board(board: Board, options: GameOptions) -> Self {
        let mut game = Game {
            start: board.clone(),
            board,
            options,
            history: Vec::new(),
            status: GameStatus::InProgress,
        };
        // Check only ends the game when a move gives it.
        game.update_status(false);
        game
    }

    /// Restores the starting board and clears the history.
    pub fn reset(&mut self) {
        self.board = self.start.clone();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.update_status(false);
        tracing::debug!("game reset");
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session policies.
    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the player to move.
    pub fn side_to_move(&self) -> Player {
        self.board.side_to_move()
    }

    /// Returns whether the game is in progress or how it ended.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        StandardShogi.is_check(&self.board)
    }

    /// Returns the applied moves, oldest first.
    pub fn move_history(&self) -> &[MoveReport] {
        &self.history
    }

    /// Returns the number of moves played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        StandardShogi.legal_moves(&self.board)
    }

    /// Returns the squares the piece on `from` may move to.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, from)
    }

    /// Returns the squares where the side to move may drop `kind`.
    pub fn legal_drop_squares(&self, kind: PieceKind) -> Vec<Square> {
        StandardShogi.legal_drop_squares(&self.board, kind)
    }

    /// Returns the pieces `player` holds in hand.
    pub fn captured_pieces(&self, player: Player) -> Vec<PieceKind> {
        self.board.captured_pieces(player)
    }

    /// Makes a move.
    ///
    /// With [`GameOptions::auto_promote`] set, a board move that may promote
    /// is applied promoted.
    pub fn make_move(&mut self, m: Move) -> Result<MoveReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let m = self.resolve_promotion(m);
        let captured = StandardShogi.try_make_move(&mut self.board, m)?;
        let check = StandardShogi.is_check(&self.board);
        let report = MoveReport {
            mov: m,
            captured,
            check,
        };
        tracing::debug!(%m, ?captured, check, "move applied");

        self.history.push(report);
        self.update_status(check);
        Ok(report)
    }

    /// Makes a move given as raw coordinates; `from` equal to
    /// [`Move::NO_SOURCE`] drops `drop_kind`.
    pub fn make_move_coords(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        drop_kind: Option<PieceKind>,
        promote: bool,
    ) -> Result<MoveReport, GameError> {
        let m = Move::from_coords(from, to, drop_kind, promote)?;
        self.make_move(m)
    }

    fn resolve_promotion(&self, m: Move) -> Move {
        if !self.options.auto_promote || m.is_promotion() {
            return m;
        }
        let promoted = m.with_promotion(true);
        if promoted != m && StandardShogi.is_legal(&self.board, promoted) {
            promoted
        } else {
            m
        }
    }

    fn update_status(&mut self, check: bool) {
        let end = StandardShogi.game_end(&self.board).or_else(|| {
            (check && self.options.end_on_check).then(|| GameEnd::Check {
                checked: self.board.side_to_move(),
            })
        });
        if let Some(end) = end {
            tracing::info!(?end, winner = %end.winner(), "game over");
            self.status = GameStatus::Over(end);
        }
    }
}
