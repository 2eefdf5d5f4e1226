//! Perft node counting over the legal move generator.
//!
//! Walks the tree with apply/revert on one position and tallies leaf
//! statistics. Used to validate the generator against known counts and as a
//! benchmark workload.

use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::{has_any_legal_move, is_in_check};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf statistics `depth` plies below `position`.
pub fn perft(position: &mut Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(position.board(), position.side_to_move()) {
        let counts = position.with_move(mv, |child| perft_recurse(child, &mv, depth - 1));
        total.merge(counts);
    }
    total
}

fn perft_recurse(position: &mut Position, last: &Move, depth: u8) -> PerftCounts {
    if depth == 0 {
        let side = position.side_to_move();
        let in_check = is_in_check(position.board(), side);
        return PerftCounts {
            nodes: 1,
            captures: usize::from(last.captured.is_some()),
            promotions: usize::from(last.is_promotion()),
            checks: usize::from(in_check),
            checkmates: usize::from(in_check && !has_any_legal_move(position.board(), side)),
        };
    }
    perft(position, depth)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(position: &mut Position, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_legal_moves(position.board(), position.side_to_move())
        .into_iter()
        .map(|mv| {
            let nodes = position.with_move(mv, |child| perft(child, depth - 1).nodes);
            (mv, nodes)
        })
        .collect()
}
