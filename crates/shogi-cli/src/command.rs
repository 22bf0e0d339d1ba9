//! Input line parsing.

use shogi_core::{ParseKindError, PieceKind};
use thiserror::Error;

/// Errors produced while parsing an input line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("not a number: {0}")]
    InvalidNumber(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Kind(#[from] ParseKindError),
}

/// Commands read from the terminal. Coordinates are `(column, row)` and are
/// passed through unchecked; the engine rejects anything off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the board.
    Show,
    /// Move a piece on the board.
    Move {
        from: (i32, i32),
        to: (i32, i32),
        promote: bool,
    },
    /// Drop a piece from the hand.
    Drop { kind: PieceKind, to: (i32, i32) },
    /// List the squares a piece may move to.
    Targets { at: (i32, i32) },
    /// List the squares a kind may be dropped on.
    Drops { kind: PieceKind },
    /// Count the legal moves.
    Moves,
    /// Start over from the opening board.
    Reset,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parse one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut parts = input.split_whitespace();
        let cmd = match parts.next() {
            Some(cmd) => cmd,
            None => return Ok(Command::Empty),
        };

        let command = match cmd {
            "show" | "board" => Command::Show,
            "move" | "m" => {
                let from = coords(&mut parts, "source square")?;
                let to = coords(&mut parts, "destination square")?;
                let promote = match parts.next() {
                    Some("+") => true,
                    Some(other) => return Err(CommandError::UnexpectedArgument(other.to_string())),
                    None => false,
                };
                Command::Move { from, to, promote }
            }
            "drop" | "d" => {
                let kind = piece_kind(&mut parts)?;
                let to = coords(&mut parts, "destination square")?;
                Command::Drop { kind, to }
            }
            "targets" | "t" => Command::Targets {
                at: coords(&mut parts, "square")?,
            },
            "drops" => Command::Drops {
                kind: piece_kind(&mut parts)?,
            },
            "moves" => Command::Moves,
            "reset" | "new" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match parts.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn number<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<i32, CommandError> {
    let text = parts.next().ok_or(CommandError::MissingArgument(what))?;
    text.parse()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}

fn coords<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<(i32, i32), CommandError> {
    Ok((number(&mut *parts, what)?, number(&mut *parts, what)?))
}

fn piece_kind<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<PieceKind, CommandError> {
    let text = parts.next().ok_or(CommandError::MissingArgument("piece"))?;
    Ok(text.parse()?)
}
