//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by the game facade, the
//! FEN utilities and the search entry points. Every rejected operation maps to
//! a distinct variant so a caller can never mistake a refusal for a no-op.
//!
//! Usage guidelines:
//! - `IllegalMove`, `OutOfBounds`, `NotComputersTurn` and `NothingToUndo` are
//!   recoverable: re-render the current state and prompt again.
//! - `GameOver` means the caller has to start a new game to continue.
//! - `NoLegalMove` is an internal invariant violation; it cannot happen while
//!   status is recomputed after every move.

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameState, Square};

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The requested move fails one of the validator rules.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game already reached a terminal state.
    #[error("game is over ({0:?}); start a new game to continue")]
    GameOver(GameState),

    /// `computer_move` was requested while the human is to move.
    #[error("it is not the computer's turn ({side_to_move} to move)")]
    NotComputersTurn { side_to_move: Color },

    /// The side to move has no legal move although the status says otherwise.
    #[error("no legal move available for {0}")]
    NoLegalMove(Color),

    /// Row or column outside `0..8`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    /// Undo requested with an empty move history.
    #[error("there is no move to undo")]
    NothingToUndo,

    /// A FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A parsed position breaks a board invariant (king count, king en prise).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Unknown difficulty name.
    #[error("unknown difficulty: {0}")]
    InvalidDifficulty(String),

    /// Malformed algebraic square such as `"i9"`.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// The search was stopped before any depth completed.
    #[error("search aborted before completing a single depth")]
    SearchAborted,
}

/// Result alias for chess engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
