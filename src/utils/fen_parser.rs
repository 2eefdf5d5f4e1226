//! FEN-to-Position parser.
//!
//! Reads the board layout and side-to-move fields. Castling and en-passant
//! fields are accepted for compatibility but must not grant rights that the
//! rule set does not have: anything other than `-` in the en-passant field is
//! rejected, castling letters are ignored. Clock fields are optional.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::position::Position;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side-to-move".to_owned()))?;

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    if let Some(castling_part) = parts.next() {
        validate_castling_field(castling_part)?;
    }
    if let Some(en_passant_part) = parts.next() {
        if en_passant_part != "-" {
            return Err(ChessError::InvalidFen(format!(
                "en passant is not supported (field '{en_passant_part}')"
            )));
        }
    }
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| ChessError::InvalidFen(format!("invalid move counter '{clock}'")))?;
    }
    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("FEN has extra trailing fields".to_owned()));
    }

    Position::from_parts(board, side_to_move)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            let square = Square::new(row, col).ok_or_else(|| {
                ChessError::InvalidFen(format!("rank {} has too many files", 8 - row))
            })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field '{side_part}'"
        ))),
    }
}

fn validate_castling_field(castling_part: &str) -> ChessResult<()> {
    if castling_part == "-" {
        return Ok(());
    }
    match castling_part.chars().find(|ch| !matches!(ch, 'K' | 'Q' | 'k' | 'q')) {
        Some(ch) => Err(ChessError::InvalidFen(format!(
            "invalid castling rights character '{ch}'"
        ))),
        None => Ok(()),
    }
}
