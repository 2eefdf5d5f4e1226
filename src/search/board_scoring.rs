//! Static material evaluation.
//!
//! Conventions:
//! - Scores are integers in pawn units: pawn 1, knight 3, bishop 3, rook 5,
//!   queen 9, king 0.
//! - A score is always relative to one side: that side's material counts
//!   positive and the opponent's negative.
//! - Mate is outside the material range: `MATE_SCORE` minus the ply at which
//!   it happens, so shorter mates score higher.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};

pub type Score = i32;

/// Magnitude of a mate score; far above any reachable material total.
pub const MATE_SCORE: Score = 100_000;
/// Bounds for the alpha-beta window.
pub const MIN_SCORE: Score = -MATE_SCORE - 1;
pub const MAX_SCORE: Score = MATE_SCORE + 1;

/// Conventional material value for a given piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Material balance from `perspective`'s point of view.
pub fn evaluate(board: &Board, perspective: Color) -> Score {
    let own: Score = board
        .pieces_of(perspective)
        .map(|(_, piece)| piece_value(piece.kind))
        .sum();
    let other: Score = board
        .pieces_of(perspective.opposite())
        .map(|(_, piece)| piece_value(piece.kind))
        .sum();
    own - other
}

/// Score for `perspective` when the side to move at `ply` has been mated.
#[inline]
pub fn mated_score(mated: Color, perspective: Color, ply: u8) -> Score {
    let magnitude = MATE_SCORE - Score::from(ply);
    if mated == perspective {
        -magnitude
    } else {
        magnitude
    }
}

/// True when `score` encodes a forced mate rather than material.
#[inline]
pub fn is_mate_score(score: Score) -> bool {
    score.abs() > MATE_SCORE - 1_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;

    #[test]
    fn starting_position_is_balanced_for_both_sides() {
        let board = Board::starting_position();
        assert_eq!(evaluate(&board, Color::White), 0);
        assert_eq!(evaluate(&board, Color::Black), 0);
    }

    #[test]
    fn evaluation_sign_follows_the_perspective() {
        // White is a queen and a pawn up.
        let position = Position::from_fen("4k3/8/8/8/8/8/3P4/3QK3 w - - 0 1")
            .expect("fixture should parse");
        assert_eq!(evaluate(position.board(), Color::White), 10);
        assert_eq!(evaluate(position.board(), Color::Black), -10);
    }

    #[test]
    fn faster_mates_score_higher_and_are_recognised() {
        let quick = mated_score(Color::Black, Color::White, 1);
        let slow = mated_score(Color::Black, Color::White, 3);
        assert!(quick > slow);
        assert!(is_mate_score(quick));
        assert!(is_mate_score(mated_score(Color::White, Color::White, 2)));
        assert!(!is_mate_score(39));
        assert!(mated_score(Color::White, Color::White, 2) < 0);
    }
}
