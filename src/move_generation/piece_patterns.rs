//! Per-kind movement patterns.
//!
//! These answer "can this piece reach that square" from geometry and
//! occupancy alone. Ownership of the destination and self-check are layered
//! on top by [`legal_move_checks`](crate::move_generation::legal_move_checks).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares sharing a row, column or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).signum();
    let d_col = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from.offset(d_row, d_col);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(d_row, d_col);
    }
    // Walked off the board without meeting `to`: not on a shared line.
    false
}

/// Does `piece` standing on `from` have a movement pattern onto `to`?
pub fn pattern_allows(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::Pawn => pawn_allows(board, piece.color, from, to, d_row, d_col),
        PieceKind::Knight => knight_allows(d_row, d_col),
        PieceKind::Bishop => bishop_allows(board, from, to, d_row, d_col),
        PieceKind::Rook => rook_allows(board, from, to, d_row, d_col),
        PieceKind::Queen => {
            rook_allows(board, from, to, d_row, d_col) || bishop_allows(board, from, to, d_row, d_col)
        }
        PieceKind::King => king_allows(d_row, d_col),
    }
}

fn pawn_allows(board: &Board, color: Color, from: Square, to: Square, d_row: i8, d_col: i8) -> bool {
    let direction = color.pawn_direction();

    if d_col == 0 {
        if !board.is_empty(to) {
            return false;
        }
        if d_row == direction {
            return true;
        }
        // Double step from the start row. The skipped square must be empty
        // too, so a pawn never hops a blocker (e.g. c2-c4 over a knight on c3).
        return from.row() == color.pawn_start_row() as usize
            && d_row == 2 * direction
            && from.offset(direction, 0).is_some_and(|mid| board.is_empty(mid));
    }

    d_col.abs() == 1 && d_row == direction && !board.is_empty(to)
}

#[inline]
fn knight_allows(d_row: i8, d_col: i8) -> bool {
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

#[inline]
fn bishop_allows(board: &Board, from: Square, to: Square, d_row: i8, d_col: i8) -> bool {
    d_row.abs() == d_col.abs() && is_path_clear(board, from, to)
}

#[inline]
fn rook_allows(board: &Board, from: Square, to: Square, d_row: i8, d_col: i8) -> bool {
    (d_row == 0 || d_col == 0) && is_path_clear(board, from, to)
}

#[inline]
fn king_allows(d_row: i8, d_col: i8) -> bool {
    d_row.abs() <= 1 && d_col.abs() <= 1
}
