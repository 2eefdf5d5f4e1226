//! Move legality, check detection and game-status classification.
//!
//! The validator works square-by-square on a [`Board`]: a move is legal when
//! the mover owns the source piece, the destination is not friendly, the
//! piece pattern allows it, and the mover's own king is not attacked after it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, build_move};
use crate::move_generation::piece_patterns::pattern_allows;

/// True if `piece` belongs to `color`.
#[inline]
pub fn is_piece_color(piece: Piece, color: Color) -> bool {
    piece.is_color(color)
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// Is any piece of `attacker` able to move onto `square` by pattern alone?
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, piece)| pattern_allows(board, piece, from, square))
}

/// Is `color`'s king attacked? A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Movement rules without the self-check test: ownership, friendly
/// destination, king capture and the piece pattern.
pub fn is_pseudo_legal_move(board: &Board, from: Square, to: Square, side_to_move: Color) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if !is_piece_color(piece, side_to_move) {
        return false;
    }
    if let Some(target) = board.piece_at(to) {
        // Kings are never captured; only a corrupted position could offer it.
        if is_piece_color(target, side_to_move) || target.kind == PieceKind::King {
            return false;
        }
    }
    pattern_allows(board, piece, from, to)
}

/// Full legality check for `side_to_move` moving `from` -> `to`.
pub fn is_legal_move(board: &Board, from: Square, to: Square, side_to_move: Color) -> bool {
    if !is_pseudo_legal_move(board, from, to, side_to_move) {
        return false;
    }
    !leaves_king_in_check(board, from, to, side_to_move)
}

/// Try the move on a scratch copy and report whether the mover's king hangs.
#[inline]
fn leaves_king_in_check(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    let mut scratch = *board;
    match build_move(&scratch, from, to) {
        Some(mv) => {
            apply_move(&mut scratch, &mv);
            is_in_check(&scratch, mover)
        }
        None => true,
    }
}

/// Does `color` have at least one legal move? Stops at the first one found.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        Square::all().any(|to| is_legal_move(board, from, to, color))
    })
}

/// Status for `side_to_move` after a completed move.
pub fn game_state_for(board: &Board, side_to_move: Color) -> GameState {
    let can_move = has_any_legal_move(board, side_to_move);
    if is_in_check(board, side_to_move) {
        if can_move {
            GameState::Check
        } else {
            GameState::Checkmate
        }
    } else if !can_move {
        GameState::Stalemate
    } else {
        GameState::Playing
    }
}
