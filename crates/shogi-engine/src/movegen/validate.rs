//! Move legality.
//!
//! Legality here is the board-level rule set: piece movement, path
//! obstruction, promotion and drop restrictions. Leaving one's own king
//! attacked is not rejected.

use crate::Board;
use shogi_core::{Move, Piece, PieceKind, Player, Square};

/// Returns true if `m` is legal for the side to move.
///
/// This is the single check callers must pass before
/// [`make_move`](crate::make_move). It has no side effects.
pub fn is_legal(board: &Board, m: Move) -> bool {
    let us = board.side_to_move();
    match m {
        Move::Drop { to, kind } => is_legal_drop(board, us, to, kind),
        Move::Normal { from, to, promote } => is_legal_normal(board, us, from, to, promote),
    }
}

/// Returns true if the move described by raw coordinates is legal.
///
/// `from` equal to [`Move::NO_SOURCE`] denotes a drop of `drop_kind`.
/// Any coordinate off the board makes the move illegal.
pub fn is_legal_coords(
    board: &Board,
    from: (i32, i32),
    to: (i32, i32),
    drop_kind: Option<PieceKind>,
    promote: bool,
) -> bool {
    Move::from_coords(from, to, drop_kind, promote).is_ok_and(|m| is_legal(board, m))
}

/// Returns true if a piece of `kind` owned by `player` standing on `sq`
/// would have no further move. Such pieces must promote when arriving by a
/// board move and may not be dropped there.
pub fn is_dead_end(kind: PieceKind, player: Player, sq: Square) -> bool {
    let distance = player.distance_to_far_edge(sq.row());
    match kind {
        PieceKind::Pawn | PieceKind::Lance => distance == 0,
        PieceKind::Knight => distance <= 1,
        _ => false,
    }
}

/// Returns true if a piece of `kind` moving from `from` to `to` may promote:
/// the kind must have a promoted form and either square must be in the
/// mover's promotion zone.
pub fn promotion_allowed(kind: PieceKind, player: Player, from: Square, to: Square) -> bool {
    kind.can_promote()
        && (player.in_promotion_zone(from.row()) || player.in_promotion_zone(to.row()))
}

/// Returns true if a piece of `kind` arriving on `to` must promote.
#[inline]
pub fn promotion_required(kind: PieceKind, player: Player, to: Square) -> bool {
    is_dead_end(kind, player, to)
}

fn is_legal_drop(board: &Board, us: Player, to: Square, kind: PieceKind) -> bool {
    if board.hand(us).count(kind) == 0 || !board.is_empty(to) {
        return false;
    }
    if kind == PieceKind::Pawn && board.has_pawn_in_column(us, to.col()) {
        return false;
    }
    !is_dead_end(kind, us, to)
}

fn is_legal_normal(
    board: &Board,
    us: Player,
    from: Square,
    to: Square,
    promote: bool,
) -> bool {
    let piece = match board.piece_at(from) {
        Some(p) if p.owner == us => p,
        _ => return false,
    };
    if board.piece_at(to).is_some_and(|p| p.owner == us) {
        return false;
    }
    if promote {
        if !promotion_allowed(piece.kind, us, from, to) {
            return false;
        }
    } else if promotion_required(piece.kind, us, to) {
        return false;
    }
    can_reach(board, piece, from, to)
}

/// Returns true if `piece` standing on `from` can move to `to` following its
/// movement table, with every square passed over by a slide empty. The
/// occupant of `to` is not examined.
pub(crate) fn can_reach(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let (dx, dy) = from.delta_to(to);
    piece.movements().any(|dir| match dir.steps_to(dx, dy) {
        Some(steps) => (1..steps).all(|i| {
            let i = i as i8;
            from.shift(dir.dx * i, dir.dy * i)
                .is_some_and(|sq| board.is_empty(sq))
        }),
        None => false,
    })
}
