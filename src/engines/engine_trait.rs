//! Engine abstraction shared by the match harness, the background searcher
//! and the self-play runner. `ChessGame` calls the search directly.
//!
//! Defines common input parameters and output payloads so different move
//! pickers can be swapped behind a single trait object.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;
use crate::search::board_scoring::Score;
use crate::search::search_limits::StopFlag;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth.
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<Score>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_stop_signal(&mut self, _stop: Option<StopFlag>) {}

    /// Pick a move for the side to move in `position`. `best_move` is `None`
    /// only when that side has no legal move.
    fn choose_move(&mut self, position: &Position, params: &GoParams)
        -> ChessResult<EngineOutput>;
}
