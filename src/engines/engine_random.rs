//! Uniform random-move engine.
//!
//! Used for hints, seeded self-play openings and as a weak sparring partner
//! in the match harness. Seeded construction makes its choices reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "HubChess Random"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = generate_legal_moves(position.board(), position.side_to_move());

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_legal_move;

    #[test]
    fn same_seed_same_choices() {
        let position = Position::new_game();
        let mut a = RandomEngine::with_seed(7);
        let mut b = RandomEngine::with_seed(7);
        for _ in 0..5 {
            let left = a.choose_move(&position, &GoParams::default()).expect("ok");
            let right = b.choose_move(&position, &GoParams::default()).expect("ok");
            assert_eq!(left.best_move, right.best_move);
        }
    }

    #[test]
    fn chosen_move_is_legal() {
        let position = Position::new_game();
        let mut engine = RandomEngine::with_seed(11);
        let mv = engine
            .choose_move(&position, &GoParams::default())
            .expect("ok")
            .best_move
            .expect("starting position has moves");
        assert!(is_legal_move(position.board(), mv.from, mv.to, position.side_to_move()));
    }

    #[test]
    fn stalemated_side_gets_no_move() {
        let position =
            Position::from_fen("8/8/8/8/8/kq6/8/K7 w - - 0 1").expect("fixture should parse");
        let out = RandomEngine::with_seed(1)
            .choose_move(&position, &GoParams::default())
            .expect("ok");
        assert_eq!(out.best_move, None);
    }
}
