//! Win/loss/draw counters fed by finished games. Storage is up to the caller.

use crate::game_state::chess_types::Outcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_land_in_their_own_counter() {
        let mut tally = ScoreTally::default();
        tally.record(Outcome::WhiteWins);
        tally.record(Outcome::Draw);
        tally.record(Outcome::Draw);
        tally.record(Outcome::BlackWins);
        assert_eq!(
            tally,
            ScoreTally {
                white_wins: 1,
                black_wins: 1,
                draws: 2
            }
        );
        assert_eq!(tally.games(), 4);
        tally.reset();
        assert_eq!(tally.games(), 0);
    }
}
