//! Line-oriented game loop.

use crate::command::Command;
use crate::render::{render, Style};
use shogi_core::{Move, MoveError, Square};
use shogi_engine::{Game, GameEnd, GameError, GameStatus, MoveReport};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  show                       print the board
  move <x> <y> <x> <y> [+]   move a piece, + to promote
  drop <P|L|N|S|G|B|R> <x> <y>
  targets <x> <y>            squares the piece on (x,y) may move to
  drops <kind>               squares where <kind> may be dropped
  moves                      count legal moves
  reset                      start a new game
  quit";

/// A game driven by text commands.
pub struct Session<R, W> {
    game: Game,
    style: Style,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading commands from `reader` and writing to `writer`.
    pub fn new(game: Game, style: Style, reader: R, writer: W) -> Self {
        Session {
            game,
            style,
            reader,
            writer,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.show()?;
        let mut line = String::new();
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(());
            }

            let keep_going = match Command::parse(&line) {
                Ok(cmd) => self.execute(cmd)?,
                Err(e) => {
                    writeln!(self.writer, "error: {}", e)?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Runs one command. Returns false when the session should end.
    pub fn execute(&mut self, cmd: Command) -> io::Result<bool> {
        tracing::trace!(?cmd, "executing");
        match cmd {
            Command::Show => self.show()?,
            Command::Move { from, to, promote } => {
                let result = self.game.make_move_coords(from, to, None, promote);
                self.report(result)?;
            }
            Command::Drop { kind, to } => {
                let result = self.game.make_move_coords(Move::NO_SOURCE, to, Some(kind), false);
                self.report(result)?;
            }
            Command::Targets { at } => match square(at) {
                Ok(sq) => {
                    let targets = self.game.legal_destinations(sq);
                    self.list("targets", &targets)?;
                }
                Err(e) => writeln!(self.writer, "error: {}", e)?,
            },
            Command::Drops { kind } => {
                let squares = self.game.legal_drop_squares(kind);
                self.list("drops", &squares)?;
            }
            Command::Moves => {
                writeln!(self.writer, "legal moves: {}", self.game.legal_moves().len())?;
            }
            Command::Reset => {
                self.game.reset();
                writeln!(self.writer, "new game")?;
                self.show()?;
            }
            Command::Help => writeln!(self.writer, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
        }
        Ok(true)
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn show(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", render(self.game.board(), self.style))
    }

    fn report(&mut self, result: Result<MoveReport, GameError>) -> io::Result<()> {
        let report = match result {
            Ok(report) => report,
            Err(e) => return writeln!(self.writer, "error: {}", e),
        };

        write!(self.writer, "played {}", report.mov)?;
        if let Some(victim) = report.captured {
            write!(self.writer, ", captured {}", victim.kind)?;
        }
        if report.check {
            write!(self.writer, ", check")?;
        }
        writeln!(self.writer)?;
        self.show()?;

        if let GameStatus::Over(end) = self.game.status() {
            let reason = match end {
                GameEnd::Check { .. } => "check",
                GameEnd::KingCaptured { .. } => "king captured",
            };
            writeln!(
                self.writer,
                "game over: {} wins ({}); type reset to play again",
                end.winner(),
                reason
            )?;
        }
        Ok(())
    }

    fn list(&mut self, label: &str, squares: &[Square]) -> io::Result<()> {
        if squares.is_empty() {
            return writeln!(self.writer, "{}: none", label);
        }
        let text: Vec<_> = squares.iter().map(|s| s.to_string()).collect();
        writeln!(self.writer, "{}: {}", label, text.join(" "))
    }
}

fn square((x, y): (i32, i32)) -> Result<Square, MoveError> {
    Square::from_coords(x, y).ok_or(MoveError::OffBoard { x, y })
}
