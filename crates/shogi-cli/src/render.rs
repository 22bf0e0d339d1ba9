//! Board rendering for the terminal.

use serde::{Deserialize, Serialize};
use shogi_core::{Piece, PieceKind, Player, Square, BOARD_SIZE};
use shogi_engine::Board;
use std::fmt::Write;

/// How pieces are drawn.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Kanji glyphs; the second player's pieces are prefixed with `v`.
    #[default]
    Kanji,
    /// Letters; the first player's pieces are upper case, the second
    /// player's lower case, promoted pieces prefixed with `+`.
    Ascii,
}

impl Style {
    fn cell(self, piece: Option<Piece>) -> String {
        match (self, piece) {
            (Style::Kanji, None) => " ・".to_string(),
            (Style::Kanji, Some(p)) => {
                let mark = if p.owner == Player::Second { 'v' } else { ' ' };
                format!("{}{}", mark, p.kanji())
            }
            (Style::Ascii, None) => "  .".to_string(),
            (Style::Ascii, Some(p)) => {
                let symbol = match p.owner {
                    Player::First => p.kind.symbol().to_string(),
                    Player::Second => p.kind.symbol().to_lowercase(),
                };
                format!("{:>3}", symbol)
            }
        }
    }

    fn hand_piece(self, kind: PieceKind) -> String {
        match self {
            Style::Kanji => kind.kanji().to_string(),
            Style::Ascii => kind.symbol().to_string(),
        }
    }
}

/// Renders the board with column and row numbers, both hands and the
/// player to move.
pub fn render(board: &Board, style: Style) -> String {
    let mut out = String::new();

    out.push(' ');
    for col in 0..BOARD_SIZE {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{}", row);
        for col in 0..BOARD_SIZE {
            let piece = Square::new(col, row).and_then(|sq| board.piece_at(sq));
            out.push_str(&style.cell(piece));
        }
        out.push('\n');
    }

    for player in Player::ALL {
        let held: Vec<_> = board
            .hand(player)
            .pieces()
            .map(|kind| style.hand_piece(kind))
            .collect();
        let _ = writeln!(out, "{} hand: {}", player, held.join(" "));
    }
    let _ = write!(out, "{} to move", board.side_to_move());
    out
}
