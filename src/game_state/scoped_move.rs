//! Apply-then-restore guard used by search and speculative queries.
//!
//! `ScopedMove` commits a move when created and reverts it when dropped, so the
//! undo happens on every exit path, unwinding included.

use std::ops::{Deref, DerefMut};

use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

pub struct ScopedMove<'a> {
    position: &'a mut Position,
    mv: Move,
}

impl<'a> ScopedMove<'a> {
    pub fn new(position: &'a mut Position, mv: Move) -> Self {
        position.commit_move(&mv);
        Self { position, mv }
    }

    #[inline]
    pub fn applied(&self) -> &Move {
        &self.mv
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.position.revert_move(&self.mv);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_apply::build_move;
    use crate::utils::algebraic::algebraic_to_square;

    fn knight_out(position: &Position) -> Move {
        let g1 = algebraic_to_square("g1").expect("g1 should parse");
        let f3 = algebraic_to_square("f3").expect("f3 should parse");
        build_move(position.board(), g1, f3).expect("knight on g1")
    }

    #[test]
    fn guard_restores_on_drop() {
        let mut position = Position::new_game();
        let original = position;
        let mv = knight_out(&position);
        {
            let scoped = ScopedMove::new(&mut position, mv);
            assert_eq!(scoped.side_to_move(), Color::Black);
            assert_eq!(scoped.applied(), &mv);
        }
        assert_eq!(position, original);
    }

    #[test]
    fn guard_restores_when_the_continuation_panics() {
        let mut position = Position::new_game();
        let original = position;
        let mv = knight_out(&position);

        let result = catch_unwind(AssertUnwindSafe(|| {
            position.with_move(mv, |_| panic!("continuation failed"));
        }));

        assert!(result.is_err());
        assert_eq!(position, original);
    }

    #[test]
    fn with_move_returns_the_continuation_value() {
        let mut position = Position::new_game();
        let mv = knight_out(&position);
        let side_inside = position.with_move(mv, |inner| inner.side_to_move());
        assert_eq!(side_inside, Color::Black);
        assert_eq!(position.side_to_move(), Color::White);
    }
}
