//! 8x8 mailbox board.
//!
//! `Board` stores an optional [`Piece`] per square and nothing else. Whose
//! turn it is lives in [`Position`](crate::game_state::position::Position) so
//! both can be replaced together.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(*kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    /// Clears `square` and returns whatever stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    /// First king of `color` in row-major scan order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|sq| self.piece_at(*sq) == Some(Piece::new(PieceKind::King, color)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        Square::all().filter(|sq| self.piece_at(*sq) == Some(piece)).count()
    }

    /// Occupied squares of `color` in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.is_color(color) => Some((sq, piece)),
            _ => None,
        })
    }

    /// Read-only copy of the grid for renderers.
    #[inline]
    pub fn snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_thirty_two_pieces_and_one_king_each() {
        let board = Board::starting_position();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert_eq!(board.count(Piece::new(PieceKind::King, Color::White)), 1);
        assert_eq!(board.count(Piece::new(PieceKind::King, Color::Black)), 1);
        assert_eq!(board.find_king(Color::White), Square::new(7, 4));
        assert_eq!(board.find_king(Color::Black), Square::new(0, 4));
    }

    #[test]
    fn take_clears_the_square() {
        let mut board = Board::starting_position();
        let e2 = Square::new(6, 4).expect("in range");
        assert_eq!(board.take(e2), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(board.is_empty(e2));
        assert_eq!(board.take(e2), None);
    }
}
