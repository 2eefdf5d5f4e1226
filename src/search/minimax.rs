//! Minimax search with alpha-beta pruning over a single mutable position.
//!
//! Every speculative move is applied and reverted through
//! [`Position::with_move`], so the tree walk never copies the board and the
//! caller's position is unchanged when a search returns.
//!
//! Scores are relative to the root side to move (the maximizing side).
//! Terminal nodes are detected at every depth, horizon included: a mated side
//! to move scores `-(MATE_SCORE - ply)` from its own point of view and a
//! stalemate scores 0.
//!
//! Root moves are searched with the full window in generation order and the
//! first strictly better score wins, which keeps the chosen move stable for a
//! given position and depth.

use log::{debug, trace};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::{has_any_legal_move, is_in_check};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::{evaluate, mated_score, Score, MAX_SCORE, MIN_SCORE};
use crate::search::difficulty::Difficulty;
use crate::search::search_limits::SearchLimits;

/// Nodes between two polls of the search limits.
const POLL_INTERVAL_MASK: u64 = 1023;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
}

struct Searcher<'a> {
    root: Color,
    limits: &'a SearchLimits,
    nodes: u64,
    aborted: bool,
}

impl<'a> Searcher<'a> {
    fn new(root: Color, limits: &'a SearchLimits) -> Self {
        Self {
            root,
            limits,
            nodes: 0,
            aborted: false,
        }
    }

    #[inline]
    fn poll(&mut self) -> bool {
        if !self.aborted && self.nodes & POLL_INTERVAL_MASK == 0 && self.limits.should_stop() {
            self.aborted = true;
        }
        self.aborted
    }

    #[inline]
    fn terminal_score(&self, position: &Position, ply: u8) -> Score {
        let side = position.side_to_move();
        if is_in_check(position.board(), side) {
            mated_score(side, self.root, ply)
        } else {
            0
        }
    }

    fn alpha_beta(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        ply: u8,
    ) -> Score {
        self.nodes += 1;
        if self.poll() {
            return 0;
        }

        let side = position.side_to_move();

        if depth == 0 {
            if !has_any_legal_move(position.board(), side) {
                return self.terminal_score(position, ply);
            }
            return evaluate(position.board(), self.root);
        }

        let moves = generate_legal_moves(position.board(), side);
        if moves.is_empty() {
            return self.terminal_score(position, ply);
        }

        if side == self.root {
            let mut best = MIN_SCORE;
            for mv in moves {
                let score = position.with_move(mv, |child| {
                    self.alpha_beta(child, depth - 1, alpha, beta, ply + 1)
                });
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha || self.aborted {
                    break;
                }
            }
            best
        } else {
            let mut best = MAX_SCORE;
            for mv in moves {
                let score = position.with_move(mv, |child| {
                    self.alpha_beta(child, depth - 1, alpha, beta, ply + 1)
                });
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha || self.aborted {
                    break;
                }
            }
            best
        }
    }

    /// Best root move at `depth`; `None` if there is no legal move or the
    /// limits fired before the iteration finished. Limits are checked before
    /// every root move as well as every `POLL_INTERVAL_MASK + 1` nodes.
    fn root(&mut self, position: &mut Position, depth: u8) -> Option<(Move, Score)> {
        let moves = generate_legal_moves(position.board(), self.root);
        let mut best: Option<(Move, Score)> = None;

        for mv in moves {
            if self.limits.should_stop() {
                self.aborted = true;
                return None;
            }
            let score = position.with_move(mv, |child| {
                self.alpha_beta(child, depth.saturating_sub(1), MIN_SCORE, MAX_SCORE, 1)
            });
            if self.aborted {
                return None;
            }
            trace!("depth {depth} root {}{} score {score}", mv.from, mv.to);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best
    }
}

/// Alpha-beta value of `position` searched `depth` plies deep, from
/// `maximizing`'s point of view. The position is restored before returning.
pub fn alpha_beta(
    position: &mut Position,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: Color,
) -> Score {
    let limits = SearchLimits::unbounded();
    let mut searcher = Searcher::new(maximizing, &limits);
    searcher.alpha_beta(position, depth, alpha, beta, 0)
}

/// Fixed-depth root search. Returns `None` when the side to move has no legal
/// move.
pub fn best_move_at_depth(position: &mut Position, depth: u8) -> Option<SearchResult> {
    let limits = SearchLimits::unbounded();
    let mut searcher = Searcher::new(position.side_to_move(), &limits);
    let (best_move, score) = searcher.root(position, depth)?;
    debug!(
        "best move {}{} score {score} depth {depth} nodes {}",
        best_move.from, best_move.to, searcher.nodes
    );
    Some(SearchResult {
        best_move,
        score,
        depth,
        nodes: searcher.nodes,
    })
}

/// Computer move for the side to move at the depth mapped from `difficulty`.
pub fn get_best_move(position: &mut Position, difficulty: Difficulty) -> Option<Move> {
    best_move_at_depth(position, difficulty.depth()).map(|result| result.best_move)
}

/// Deepen from 1 to `max_depth`, keeping the last fully searched iteration.
///
/// An iteration cut short by `limits` is thrown away. If the deadline passes
/// before depth 1 completes, the first legal move comes back at depth 0.
/// Fails with `NoLegalMove` when there is nothing to search and with
/// `SearchAborted` when the stop flag was raised before any iteration finished.
pub fn iterative_deepening_search(
    position: &mut Position,
    max_depth: u8,
    limits: &SearchLimits,
) -> ChessResult<SearchResult> {
    let side = position.side_to_move();
    if !has_any_legal_move(position.board(), side) {
        return Err(ChessError::NoLegalMove(side));
    }

    let mut completed: Option<SearchResult> = None;
    let mut total_nodes = 0u64;

    for depth in 1..=max_depth.max(1) {
        let mut searcher = Searcher::new(side, limits);
        let outcome = searcher.root(position, depth);
        total_nodes += searcher.nodes;

        match outcome {
            Some((best_move, score)) => {
                trace!(
                    "iteration depth {depth} best {}{} score {score} nodes {}",
                    best_move.from,
                    best_move.to,
                    searcher.nodes
                );
                completed = Some(SearchResult {
                    best_move,
                    score,
                    depth,
                    nodes: total_nodes,
                });
            }
            None => {
                debug!("search stopped during depth {depth}");
                break;
            }
        }
    }

    if let Some(result) = completed {
        return Ok(result);
    }
    if limits.is_cancelled() {
        return Err(ChessError::SearchAborted);
    }

    let best_move = generate_legal_moves(position.board(), side)
        .first()
        .copied()
        .ok_or(ChessError::NoLegalMove(side))?;
    debug!(
        "deadline hit before depth 1, falling back to {}{}",
        best_move.from, best_move.to
    );
    Ok(SearchResult {
        best_move,
        score: evaluate(position.board(), side),
        depth: 0,
        nodes: total_nodes,
    })
}
