//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through the
//! `ChessGame` facade, with an optional seeded random opening prefix. Games
//! end on checkmate, stalemate or the ply cap.

use std::time::Instant;

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game::chess_game::{ChessGame, GameConfig};
use crate::game::score_tally::ScoreTally;
use crate::game_state::chess_types::{Color, GameState, Move, Outcome};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::algebraic::move_to_coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn to_outcome(self) -> Outcome {
        match self {
            MatchOutcome::WhiteWinCheckmate => Outcome::WhiteWins,
            MatchOutcome::BlackWinCheckmate => Outcome::BlackWins,
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    /// Results by color rather than by player.
    pub tally: ScoreTally,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} white_wins={} black_wins={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.tally.white_wins,
            self.tally.black_wins,
            avg_ns_per_move_ms(self.player1_total_time_ns, self.player1_moves),
            avg_ns_per_move_ms(self.player2_total_time_ns, self.player2_moves),
        )
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    // Both sides are driven from here, so the facade's computer side is moot.
    let mut game = ChessGame::new(GameConfig::default());
    let opening_moves = apply_seeded_random_opening(&mut game, seed, config)?;

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        if let Some(finished) = terminal_outcome(&game) {
            outcome = finished;
            break;
        }

        let mover = game.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(game.position(), &config.go_params)?,
            Color::Black => engine_black.choose_move(game.position(), &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or(ChessError::NoLegalMove(mover))?;
        played_moves.push(move_to_coordinates(&chosen));
        play(&mut game, chosen)?;
    }
    if outcome == MatchOutcome::DrawMaxPlies {
        outcome = terminal_outcome(&game).unwrap_or(MatchOutcome::DrawMaxPlies);
    }

    debug!(
        "match seed {seed} ended {outcome:?} after {} plies",
        opening_moves.len() + played_moves.len()
    );

    Ok(MatchResult {
        outcome,
        final_position: *game.position(),
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        info!(
            "game {}/{} seed={} player1 plays {}",
            i + 1,
            config.games,
            seed,
            if player1_is_white { Color::White } else { Color::Black }
        );

        let result = if player1_is_white {
            play_engine_match(player1_factory(), player2_factory(), seed, &config.per_game)?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, &config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);
        stats.tally.record(result.outcome.to_outcome());

        let mapped = match result.outcome {
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate => {
                let color = if result.outcome == MatchOutcome::WhiteWinCheckmate {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            "game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            mapped,
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn terminal_outcome(game: &ChessGame) -> Option<MatchOutcome> {
    match game.status() {
        GameState::Checkmate => Some(match game.side_to_move() {
            Color::White => MatchOutcome::BlackWinCheckmate,
            Color::Black => MatchOutcome::WhiteWinCheckmate,
        }),
        GameState::Stalemate => Some(MatchOutcome::DrawStalemate),
        _ => None,
    }
}

fn play(game: &mut ChessGame, mv: Move) -> ChessResult<()> {
    game.play(mv.from.row(), mv.from.col(), mv.to.row(), mv.to.col())?;
    Ok(())
}

fn apply_seeded_random_opening(
    game: &mut ChessGame,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    let low = config.opening_min_plies.min(config.opening_max_plies);
    let high = config.opening_max_plies.max(config.opening_min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if game.status().is_terminal() {
            break;
        }
        let legal_moves = generate_legal_moves(game.position().board(), game.side_to_move());
        let Some(chosen) = legal_moves.choose(&mut rng).copied() else {
            break;
        };
        opening_moves.push(move_to_coordinates(&chosen));
        play(game, chosen)?;
    }

    Ok(opening_moves)
}
