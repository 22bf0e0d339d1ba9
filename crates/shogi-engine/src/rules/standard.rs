//! Standard shogi rules.

use super::{GameEnd, RuleSet};
use crate::movegen;
use crate::{Board, MoveList};
use shogi_core::{Move, Piece, PieceKind, Player, Square};

/// Standard shogi on a 9×9 board.
///
/// - Piece movement with slider obstruction
/// - Promotion inside the far three rows, mandatory on dead-end rows
/// - Drops with the double-pawn and dead-end restrictions
/// - Check detection
///
/// Moves that leave the mover's own king attacked are not rejected, so a
/// king can be captured; [`game_end`](RuleSet::game_end) reports that.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardShogi;

impl RuleSet for StandardShogi {
    fn initial_board(&self) -> Board {
        Board::new()
    }

    fn is_legal(&self, board: &Board, m: Move) -> bool {
        movegen::is_legal(board, m)
    }

    fn make_move(&self, board: &mut Board, m: Move) -> Option<Piece> {
        movegen::make_move(board, m)
    }

    fn is_check(&self, board: &Board) -> bool {
        movegen::is_check(board)
    }

    fn legal_moves(&self, board: &Board) -> MoveList {
        movegen::generate_moves(board)
    }

    fn legal_drop_squares(&self, board: &Board, kind: PieceKind) -> Vec<Square> {
        movegen::legal_drop_squares(board, kind)
    }

    fn game_end(&self, board: &Board) -> Option<GameEnd> {
        Player::ALL
            .into_iter()
            .find(|&p| board.find_king(p).is_none())
            .map(|loser| GameEnd::KingCaptured {
                winner: loser.opposite(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::EngineError;

    fn sq(col: u8, row: u8) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn initial_board() {
        let board = StandardShogi.initial_board();
        assert_eq!(board, Board::new());
        assert_eq!(StandardShogi.game_end(&board), None);
        assert!(!StandardShogi.is_check(&board));
    }

    #[test]
    fn try_make_move_default() {
        let mut board = StandardShogi.initial_board();
        let bad = Move::normal(sq(0, 8), sq(0, 4));
        assert_eq!(
            StandardShogi.try_make_move(&mut board, bad),
            Err(EngineError::IllegalMove(bad))
        );
        assert_eq!(
            StandardShogi.try_make_move(&mut board, Move::normal(sq(0, 6), sq(0, 5))),
            Ok(None)
        );
    }

    #[test]
    fn king_capture_ends_game() {
        let mut board = Board::empty();
        board.put(sq(4, 8), Piece::new(PieceKind::King, Player::First));
        assert_eq!(
            StandardShogi.game_end(&board),
            Some(GameEnd::KingCaptured {
                winner: Player::First
            })
        );
    }

    #[test]
    fn winner_of_check() {
        let end = GameEnd::Check {
            checked: Player::Second,
        };
        assert_eq!(end.winner(), Player::First);
    }
}
