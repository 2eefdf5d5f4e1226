//! Ordered legal move enumeration.
//!
//! Moves come out in board scan order: source squares row-major from a8, and
//! for each source the targets row-major from a8. Search tie-breaking relies
//! on this order being stable.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};
use crate::move_generation::legal_move_apply::build_move;
use crate::move_generation::legal_move_checks::is_legal_move;

/// All legal moves for `color` on `board`.
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    generate_legal_moves_into(board, color, &mut moves);
    moves
}

/// Same as [`generate_legal_moves`] but appends to a caller-owned buffer.
pub fn generate_legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    for (from, _) in board.pieces_of(color) {
        out.extend(legal_moves_from_square(board, from, color));
    }
}

/// Legal destinations of the piece on `from`, already described as moves.
pub fn legal_moves_from_square(
    board: &Board,
    from: Square,
    color: Color,
) -> impl Iterator<Item = Move> + '_ {
    Square::all()
        .filter(move |to| is_legal_move(board, from, *to, color))
        .filter_map(move |to| build_move(board, from, to))
}
