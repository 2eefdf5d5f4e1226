//! Engine-vs-engine series runner for smoke testing difficulty levels.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `HUB_CHESS_DIFFICULTY=hard HUB_CHESS_GAMES=4 cargo run --release --bin self_play -- --verbose`
//!
//! Player 1 is the minimax engine at the chosen difficulty, player 2 the
//! random-move engine.

use std::env;

use hub_chess::engines::engine_minimax::MinimaxEngine;
use hub_chess::engines::engine_random::RandomEngine;
use hub_chess::engines::engine_trait::Engine;
use hub_chess::search::difficulty::Difficulty;
use hub_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use log::LevelFilter;

/// Unset means Easy; anything set must name a difficulty.
fn difficulty_from_env(value: Option<String>) -> Result<Difficulty, String> {
    match value {
        None => Ok(Difficulty::Easy),
        Some(name) => name
            .parse::<Difficulty>()
            .map_err(|e| format!("HUB_CHESS_DIFFICULTY: {e}")),
    }
}

/// Unset means 4 games; anything set must be a game count.
fn games_from_env(value: Option<String>) -> Result<u16, String> {
    match value {
        None => Ok(4),
        Some(count) => count
            .trim()
            .parse::<u16>()
            .map_err(|e| format!("HUB_CHESS_GAMES: {count:?} is not a game count ({e})")),
    }
}

fn main() -> Result<(), String> {
    let verbose = env::args().any(|a| a == "--verbose" || a == "-v");
    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let difficulty = difficulty_from_env(env::var("HUB_CHESS_DIFFICULTY").ok())?;
    let games = games_from_env(env::var("HUB_CHESS_GAMES").ok())?;

    let stats = play_engine_match_series(
        || Box::new(MinimaxEngine::new(difficulty)) as Box<dyn Engine>,
        || Box::new(RandomEngine::new()) as Box<dyn Engine>,
        &MatchSeriesConfig {
            games,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 160,
                opening_min_plies: 2,
                opening_max_plies: 6,
                ..MatchConfig::default()
            },
        },
    )
    .map_err(|e| e.to_string())?;

    println!("difficulty={difficulty} {}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
