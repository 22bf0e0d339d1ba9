//! Core types for shogi.
//!
//! This crate provides the fundamental types used across the shogi engine:
//! - [`Piece`], [`PieceKind`] and [`Player`] for piece representation
//! - [`Direction`] and the per-kind movement tables
//! - [`Square`] for board coordinates
//! - [`Move`] for board moves and drops

pub mod direction;
mod mov;
mod piece;
mod player;
mod square;

pub use direction::Direction;
pub use mov::{Move, MoveError};
pub use piece::{ParseKindError, Piece, PieceKind};
pub use player::Player;
pub use square::Square;

/// Number of columns and rows on the board.
pub const BOARD_SIZE: u8 = 9;
