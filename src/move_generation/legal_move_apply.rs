//! Board mutation for a single move and its exact inverse.
//!
//! Neither function checks legality or touches side-to-move; callers validate
//! through `is_legal_move` first and flip turns at the `Position` level.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_PIECE;
use crate::game_state::chess_types::{Move, Piece, Square};

/// Describe the move `from` -> `to` on `board` without applying it.
///
/// Returns `None` when `from` is empty.
#[inline]
pub fn build_move(board: &Board, from: Square, to: Square) -> Option<Move> {
    let moved = board.piece_at(from)?;
    Some(Move {
        from,
        to,
        moved,
        captured: board.piece_at(to),
    })
}

/// Apply `mv`: clear the source, place the mover (a queen if a pawn reaches
/// its last row) on the destination.
#[inline]
pub fn apply_move(board: &mut Board, mv: &Move) {
    board.set(mv.from, None);
    let placed = if mv.is_promotion() {
        Piece::new(PROMOTION_PIECE, mv.moved.color)
    } else {
        mv.moved
    };
    board.set(mv.to, Some(placed));
}

/// Restore the board to exactly what it was before `apply_move(board, mv)`.
#[inline]
pub fn undo_move(board: &mut Board, mv: &Move) {
    board.set(mv.from, Some(mv.moved));
    board.set(mv.to, mv.captured);
}

/// Build and apply in one step, returning what moved and what was taken.
pub fn apply_move_squares(board: &mut Board, from: Square, to: Square) -> Option<Move> {
    let mv = build_move(board, from, to)?;
    apply_move(board, &mv);
    Some(mv)
}
