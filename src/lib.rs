//! Crate root module declarations for the Hub Chess engine.
//!
//! This file exposes the top-level subsystems (game state, move generation,
//! search, engines, the game facade and utility helpers) so binaries, tests
//! and user interfaces can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod scoped_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod piece_patterns;
}

pub mod search {
    pub mod board_scoring;
    pub mod difficulty;
    pub mod minimax;
    pub mod search_limits;
}

pub mod engines {
    pub mod background_search;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game {
    pub mod chess_game;
    pub mod score_tally;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_game_state;
}
