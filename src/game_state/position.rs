//! Board plus side-to-move.
//!
//! The two fields are private and only change together through
//! [`Position::commit_move`] / [`Position::revert_move`], so no observer can
//! see a moved board with a stale turn or the reverse.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameState, Move, Piece, PieceKind};
use crate::game_state::scoped_move::ScopedMove;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{game_state_for, is_in_check};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
        }
    }

    /// Build from parts, enforcing one king per color and that the side not
    /// on move is not left in check.
    pub fn from_parts(board: Board, side_to_move: Color) -> ChessResult<Self> {
        for color in [Color::White, Color::Black] {
            let kings = board.count(Piece::new(PieceKind::King, color));
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "{color} has {kings} kings, expected exactly one"
                )));
            }
        }
        if is_in_check(&board, side_to_move.opposite()) {
            return Err(ChessError::InvalidPosition(format!(
                "{} is in check but it is {} to move",
                side_to_move.opposite(),
                side_to_move
            )));
        }
        Ok(Self {
            board,
            side_to_move,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Status for the side to move.
    #[inline]
    pub fn status(&self) -> GameState {
        game_state_for(&self.board, self.side_to_move)
    }

    /// Apply an already-validated move and pass the turn.
    #[inline]
    pub fn commit_move(&mut self, mv: &Move) {
        apply_move(&mut self.board, mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Exact inverse of [`Position::commit_move`] for the same `mv`.
    #[inline]
    pub fn revert_move(&mut self, mv: &Move) {
        undo_move(&mut self.board, mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Run `f` with `mv` applied; the position is restored afterwards even if
    /// `f` unwinds.
    pub fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Position) -> R) -> R {
        let mut scoped = ScopedMove::new(self, mv);
        f(&mut *scoped)
    }
}
