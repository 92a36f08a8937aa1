//! Running tally of round results.

use crate::player::Seat;

/// Wins per seat and draws, accumulated across resets.
///
/// Each finished round adds exactly one to exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    wins_a: u32,
    wins_b: u32,
    draws: u32,
}

impl Score {
    /// Rounds won by the first player.
    pub fn wins_a(&self) -> u32 {
        self.wins_a
    }

    /// Rounds won by the second player.
    pub fn wins_b(&self) -> u32 {
        self.wins_b
    }

    /// Rounds that filled the board without a line.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Wins recorded for `seat`.
    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.wins_a,
            Seat::Second => self.wins_b,
        }
    }

    /// Finished rounds so far.
    pub fn rounds(&self) -> u32 {
        self.wins_a + self.wins_b + self.draws
    }

    pub(crate) fn record_win(&mut self, seat: Seat) {
        match seat {
            Seat::First => self.wins_a += 1,
            Seat::Second => self.wins_b += 1,
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_result_bumps_one_field() {
        let mut score = Score::default();
        score.record_win(Seat::Second);
        assert_eq!((score.wins_a(), score.wins_b(), score.draws()), (0, 1, 0));
        score.record_draw();
        assert_eq!((score.wins_a(), score.wins_b(), score.draws()), (0, 1, 1));
        score.record_win(Seat::First);
        assert_eq!(score.wins(Seat::First), 1);
        assert_eq!(score.rounds(), 3);
    }
}
