//! Shogi rule engine.
//!
//! This crate provides:
//! - [`Board`] - the 9×9 grid, both players' hands and the player to move
//! - [`Hand`] - counts of captured pieces available for dropping
//! - Move validation, execution and check detection ([`movegen`])
//! - [`RuleSet`] - trait the game session delegates board decisions to
//! - [`Game`] - a playing session with promotion and game-end policies
//!
//! # Coordinates
//!
//! Squares are `(column, row)` pairs in `0..9`. The first player starts on
//! rows 6-8 and moves toward row 0; the second player starts on rows 0-2 and
//! moves toward row 8.
//!
//! # Example
//!
//! ```
//! use shogi_core::{Move, Square};
//! use shogi_engine::{is_legal, make_move, Board, Game};
//!
//! // Using Board directly
//! let mut board = Board::new();
//! let push = Move::normal(Square::new(2, 6).unwrap(), Square::new(2, 5).unwrap());
//! assert!(is_legal(&board, push));
//! make_move(&mut board, push);
//!
//! // Using Game for a full session
//! let mut game = Game::default();
//! let report = game.make_move_coords((2, 6), (2, 5), None, false).unwrap();
//! assert!(!report.check);
//! ```

mod board;
mod game;
mod hand;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError, GameOptions, GameStatus, MoveReport};
pub use hand::Hand;
pub use movegen::{
    attackers, generate_moves, is_check, is_king_attacked, is_legal, is_legal_coords,
    is_square_attacked, legal_destinations, legal_drop_squares, make_move, try_make_move,
    MoveList,
};
pub use rules::{EngineError, GameEnd, RuleSet, StandardShogi};
