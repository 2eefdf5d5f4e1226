use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;

/// FEN for `position`. Rights fields are always `-` and the clocks are fixed
/// at `0 1` since neither is tracked.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!("{board} {side_to_move} - - 0 1")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for row in 0..8 {
        let mut empty_count = 0u8;

        for col in 0..8 {
            let piece = Square::new(row, col).and_then(|sq| position.board().piece_at(sq));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}
