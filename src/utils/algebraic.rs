//! Square and move notation helpers.
//!
//! Converts between algebraic coordinates (for example `e4`) and [`Square`],
//! and renders the display notation used by the move history:
//! `<piece letter><x if capture><file><rank>`, with no letter for pawns.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Move, PieceKind, Square};

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let col = usize::from(file - b'a');
    let row = usize::from(b'8' - rank);
    Square::new(row, col).ok_or_else(|| ChessError::InvalidAlgebraic(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Display notation for a move, e.g. `e4`, `Nf3`, `Qxh4`, `xd5`.
///
/// Not SAN: no disambiguation, no check or mate suffixes. Pawn captures keep
/// the plain `x<square>` form.
pub fn move_notation(mv: &Move) -> String {
    let mut out = String::with_capacity(4);
    if mv.moved.kind != PieceKind::Pawn {
        out.push(mv.moved.kind.letter());
    }
    if mv.captured.is_some() {
        out.push('x');
    }
    out.push(mv.to.file_char());
    out.push(mv.to.rank_char());
    out
}

/// Coordinate form `e2e4` used by hints and harness logs.
#[inline]
pub fn move_to_coordinates(mv: &Move) -> String {
    format!("{}{}", mv.from, mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::move_generation::legal_move_apply::build_move;

    #[test]
    fn round_trip_square_conversions() {
        let a8 = algebraic_to_square("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.col()), (0, 0));
        let h1 = algebraic_to_square("h1").expect("h1 should parse");
        assert_eq!((h1.row(), h1.col()), (7, 7));
        assert_eq!(square_to_algebraic(a8), "a8");
        assert_eq!(square_to_algebraic(h1), "h1");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "e44", "i4", "e9", "E4"] {
            assert!(
                matches!(algebraic_to_square(bad), Err(ChessError::InvalidAlgebraic(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn notation_omits_pawn_letter_and_marks_captures() {
        let board = Board::starting_position();
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        let pawn_push = build_move(&board, e2, e4).expect("pawn on e2");
        assert_eq!(move_notation(&pawn_push), "e4");
        assert_eq!(move_to_coordinates(&pawn_push), "e2e4");

        let g1 = algebraic_to_square("g1").expect("g1 should parse");
        let f3 = algebraic_to_square("f3").expect("f3 should parse");
        let knight = build_move(&board, g1, f3).expect("knight on g1");
        assert_eq!(move_notation(&knight), "Nf3");

        // Not a legal move; notation only looks at the moved and captured pieces.
        let d1 = algebraic_to_square("d1").expect("d1 should parse");
        let d7 = algebraic_to_square("d7").expect("d7 should parse");
        let capture = build_move(&board, d1, d7).expect("queen on d1");
        assert_eq!(move_notation(&capture), "Qxd7");
    }
}
