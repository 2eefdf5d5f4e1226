//! Alpha-beta engine with a difficulty-mapped depth.
//!
//! Without a time budget or stop signal it runs a single fixed-depth search,
//! which is what the game facade uses. With either, it deepens iteratively and
//! returns the last completed iteration.

use std::time::Duration;

use log::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::position::Position;
use crate::search::difficulty::Difficulty;
use crate::search::minimax::{best_move_at_depth, iterative_deepening_search, SearchResult};
use crate::search::search_limits::{SearchLimits, StopFlag};

pub struct MinimaxEngine {
    difficulty: Difficulty,
    stop_signal: Option<StopFlag>,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            stop_signal: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    fn limits(&self, params: &GoParams) -> Option<SearchLimits> {
        let mut limits = match params.movetime_ms {
            Some(ms) => SearchLimits::with_movetime(Duration::from_millis(ms)),
            None => SearchLimits::unbounded(),
        };
        if let Some(stop) = &self.stop_signal {
            limits = limits.with_stop_flag(stop.clone());
        }
        (limits.deadline.is_some() || limits.stop.is_some()).then_some(limits)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "HubChess Minimax"
    }

    fn set_stop_signal(&mut self, stop: Option<StopFlag>) {
        self.stop_signal = stop;
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.difficulty.depth());
        let mut scratch = *position;

        let result: Option<SearchResult> = match self.limits(params) {
            Some(limits) => match iterative_deepening_search(&mut scratch, depth, &limits) {
                Ok(result) => Some(result),
                Err(ChessError::NoLegalMove(_)) => None,
                Err(err) => return Err(err),
            },
            None => best_move_at_depth(&mut scratch, depth),
        };

        let mut out = EngineOutput::default();
        match result {
            Some(result) => {
                info!(
                    "{} chose {}{} at depth {} (score {}, {} nodes)",
                    position.side_to_move(),
                    result.best_move.from,
                    result.best_move.to,
                    result.depth,
                    result.score,
                    result.nodes
                );
                out.info_lines.push(format!(
                    "info depth {} score {} nodes {}",
                    result.depth, result.score, result.nodes
                ));
                out.best_move = Some(result.best_move);
                out.score = Some(result.score);
            }
            None => out
                .info_lines
                .push("info string minimax_engine no legal moves".to_owned()),
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_checks::is_legal_move;
    use crate::utils::algebraic::move_to_coordinates;

    #[test]
    fn fixed_depth_choice_matches_direct_search() {
        let position = Position::from_fen("r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1")
            .expect("fixture should parse");
        let mut engine = MinimaxEngine::new(Difficulty::Easy);
        let out = engine
            .choose_move(&position, &GoParams::default())
            .expect("search should succeed");
        let best = out.best_move.expect("black has moves");
        assert_eq!(move_to_coordinates(&best), "a8a1");
        assert_eq!(out.info_lines.len(), 1);
    }

    #[test]
    fn movetime_search_still_returns_a_legal_move() {
        let position = Position::new_game();
        let mut engine = MinimaxEngine::new(Difficulty::Hard);
        let params = GoParams {
            depth: Some(2),
            movetime_ms: Some(5_000),
        };
        let out = engine
            .choose_move(&position, &params)
            .expect("search should succeed");
        assert!(out.best_move.is_some());
    }

    #[test]
    fn zero_movetime_still_returns_a_legal_move() {
        let position = Position::new_game();
        let mut engine = MinimaxEngine::new(Difficulty::Expert);
        let params = GoParams {
            depth: None,
            movetime_ms: Some(0),
        };
        let best = engine
            .choose_move(&position, &params)
            .expect("a deadline is not an abort")
            .best_move
            .expect("white has moves");
        assert!(is_legal_move(position.board(), best.from, best.to, Color::White));
    }

    #[test]
    fn difficulty_setting_drives_the_default_depth() {
        let mut engine = MinimaxEngine::default();
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        engine.set_difficulty(Difficulty::Easy);
        assert_eq!(engine.difficulty(), Difficulty::Easy);

        let position = Position::new_game();
        let out = engine
            .choose_move(&position, &GoParams::default())
            .expect("search should succeed");
        assert_eq!(out.info_lines[0].split_whitespace().nth(2), Some("2"));
    }

    #[test]
    fn stopped_engine_reports_abort() {
        let mut engine = MinimaxEngine::new(Difficulty::Medium);
        let flag = StopFlag::new();
        flag.stop();
        engine.set_stop_signal(Some(flag));
        let result = engine.choose_move(&Position::new_game(), &GoParams::default());
        assert_eq!(result.err(), Some(ChessError::SearchAborted));
    }

    #[test]
    fn mated_side_gets_no_move() {
        let position = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("fixture should parse");
        let out = MinimaxEngine::default()
            .choose_move(&position, &GoParams::default())
            .expect("no-move is not an error");
        assert_eq!(out.best_move, None);
    }
}
