//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the move tree to a given depth. Counts
//! here follow the board-level rules only, so they diverge from published
//! shogi perft tables once a side can leave its king attacked.

use super::{generate_moves, make_move};
use crate::Board;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut next = board.clone();
        make_move(&mut next, *m);
        nodes += perft(&next, depth - 1);
    }
    nodes
}

/// Perft with divide: node count below each root move, sorted by move text.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_moves(board);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut next = board.clone();
        make_move(&mut next, *m);
        let nodes = if depth > 1 { perft(&next, depth - 1) } else { 1 };
        results.push((m.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
