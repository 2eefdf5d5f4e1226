//! Game facade consumed by a user interface.
//!
//! `ChessGame` owns the position, the status machine, the move history and
//! the captured-piece lists. Every mutating call either completes a whole move
//! (board, side to move, status and history updated together) or returns a
//! `ChessError` and leaves the game untouched.
//!
//! Turn handling:
//! - `play` accepts a move for whichever side is to move.
//! - `computer_move` only runs while the configured computer side is to move.
//! - `hint` only answers while the human side is to move.

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game::score_tally::ScoreTally;
use crate::game_state::chess_types::{Color, GameState, Move, Outcome, Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::build_move;
use crate::move_generation::legal_move_checks::{has_any_legal_move, is_legal_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::difficulty::Difficulty;
use crate::search::minimax::get_best_move;
use crate::utils::algebraic::move_notation;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub computer_side: Color,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_side: Color::Black,
            difficulty: Difficulty::default(),
        }
    }
}

/// One completed ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub promoted: bool,
    pub notation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub captured: Option<Piece>,
    pub notation: String,
    pub status: GameState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerMove {
    pub from: Square,
    pub to: Square,
    pub notation: String,
    pub status: GameState,
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    position: Position,
    status: GameState,
    config: GameConfig,
    history: Vec<MoveRecord>,
    captured_by_white: Vec<Piece>,
    captured_by_black: Vec<Piece>,
    outcome_reported: bool,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl ChessGame {
    pub fn new(config: GameConfig) -> Self {
        let position = Position::new_game();
        Self {
            status: position.status(),
            position,
            config,
            history: Vec::new(),
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
            outcome_reported: false,
        }
    }

    /// Start from an arbitrary position; history starts empty.
    pub fn from_fen(fen: &str, config: GameConfig) -> ChessResult<Self> {
        let position = Position::from_fen(fen)?;
        Ok(Self {
            status: position.status(),
            position,
            ..Self::new(config)
        })
    }

    /// Reset to the starting position, keeping the configuration.
    pub fn new_game(&mut self) {
        *self = Self::new(self.config);
        debug!("new game, computer plays {}", self.config.computer_side);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameState {
        self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn board_snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        self.position.board().snapshot()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces taken by `capturer`, in capture order.
    pub fn captured(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    pub fn legal_move(&self, from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match (Square::new(from_row, from_col), Square::new(to_row, to_col)) {
            (Some(from), Some(to)) => is_legal_move(self.position.board(), from, to, self.side_to_move()),
            _ => false,
        }
    }

    /// Validate and apply a move for the side to move.
    pub fn play(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> ChessResult<PlayOutcome> {
        self.ensure_not_over()?;
        let from = square(from_row, from_col)?;
        let to = square(to_row, to_col)?;

        let side = self.side_to_move();
        let mv = match build_move(self.position.board(), from, to) {
            Some(mv) if is_legal_move(self.position.board(), from, to, side) => mv,
            _ => {
                debug!("rejected {from}{to} for {side}");
                return Err(ChessError::IllegalMove { from, to });
            }
        };

        let record = self.commit(mv);
        Ok(PlayOutcome {
            captured: mv.captured,
            notation: record.notation,
            status: self.status,
        })
    }

    /// Search and apply a move for the computer side.
    pub fn computer_move(&mut self, difficulty: Difficulty) -> ChessResult<ComputerMove> {
        self.ensure_not_over()?;
        let side = self.side_to_move();
        if side != self.config.computer_side {
            return Err(ChessError::NotComputersTurn { side_to_move: side });
        }

        debug_assert!(
            has_any_legal_move(self.position.board(), side),
            "status {:?} but {side} has no legal move",
            self.status
        );
        let mv = get_best_move(&mut self.position, difficulty).ok_or(ChessError::NoLegalMove(side))?;

        let record = self.commit(mv);
        Ok(ComputerMove {
            from: mv.from,
            to: mv.to,
            notation: record.notation,
            status: self.status,
        })
    }

    /// Computer move at the configured difficulty.
    pub fn play_computer_turn(&mut self) -> ChessResult<ComputerMove> {
        self.computer_move(self.config.difficulty)
    }

    /// Take back the human's last move together with the computer's reply,
    /// or a single ply when the computer is to move.
    pub fn undo(&mut self) -> ChessResult<Vec<MoveRecord>> {
        if self.history.is_empty() {
            return Err(ChessError::NothingToUndo);
        }
        self.ensure_not_over()?;

        let plies = if self.side_to_move() != self.config.computer_side && self.history.len() >= 2 {
            2
        } else {
            1
        };

        let mut undone = Vec::with_capacity(plies);
        for _ in 0..plies {
            let Some(record) = self.history.pop() else {
                break;
            };
            self.position.revert_move(&record.mv);
            if record.mv.captured.is_some() {
                match record.mv.moved.color {
                    Color::White => self.captured_by_white.pop(),
                    Color::Black => self.captured_by_black.pop(),
                };
            }
            debug!("undid {}", record.notation);
            undone.push(record);
        }
        self.status = self.position.status();
        Ok(undone)
    }

    /// A random legal move for the human side, offered only while the game is
    /// in the plain `Playing` state.
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        if self.status != GameState::Playing || self.side_to_move() == self.config.computer_side {
            return None;
        }
        generate_legal_moves(self.position.board(), self.side_to_move())
            .choose(rng)
            .copied()
    }

    /// End a running game as a draw by agreement.
    pub fn declare_draw(&mut self) -> ChessResult<()> {
        self.ensure_not_over()?;
        self.status = GameState::Draw;
        info!("game drawn by agreement after {} plies", self.history.len());
        Ok(())
    }

    /// Result of a finished game, `None` while it is running.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameState::Checkmate => Some(Outcome::winner(self.side_to_move().opposite())),
            GameState::Stalemate | GameState::Draw => Some(Outcome::Draw),
            GameState::Playing | GameState::Check => None,
        }
    }

    /// Add the outcome to `tally` the first time it is asked for.
    pub fn record_outcome(&mut self, tally: &mut ScoreTally) -> Option<Outcome> {
        if self.outcome_reported {
            return None;
        }
        let outcome = self.outcome()?;
        tally.record(outcome);
        self.outcome_reported = true;
        Some(outcome)
    }

    pub fn render(&self) -> String {
        render_game_state(&self.position)
    }

    fn ensure_not_over(&self) -> ChessResult<()> {
        if self.status.is_terminal() {
            Err(ChessError::GameOver(self.status))
        } else {
            Ok(())
        }
    }

    fn commit(&mut self, mv: Move) -> MoveRecord {
        self.position.commit_move(&mv);
        if let Some(captured) = mv.captured {
            match mv.moved.color {
                Color::White => self.captured_by_white.push(captured),
                Color::Black => self.captured_by_black.push(captured),
            }
        }
        self.status = self.position.status();

        let record = MoveRecord {
            mv,
            promoted: mv.is_promotion(),
            notation: move_notation(&mv),
        };
        debug!("{} played {} -> {:?}", mv.moved.color, record.notation, self.status);
        if let Some(outcome) = self.outcome() {
            info!("game over after {} plies: {outcome:?}", self.history.len() + 1);
        }
        self.history.push(record.clone());
        record
    }
}

fn square(row: usize, col: usize) -> ChessResult<Square> {
    Square::new(row, col).ok_or(ChessError::OutOfBounds { row, col })
}
