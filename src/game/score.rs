use crate::consts;

/// Score for the game in progress, plus the best score seen since the
/// program started
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Scoreboard {
    score: u32,
    best: u32,
}

impl Scoreboard {
    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn best(&self) -> u32 {
        self.best
    }

    /// Zero the current score for a new game.  The best score is kept.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
    }

    /// Award points for a food and return the new score
    pub(crate) fn record_food(&mut self) -> u32 {
        self.score = self.score.saturating_add(consts::FOOD_POINTS);
        self.score
    }

    /// Close out the current game, updating the best score if it was beaten
    pub(crate) fn record_game_over(&mut self) -> FinalScore {
        let new_best = self.score > self.best;
        if new_best {
            self.best = self.score;
        }
        FinalScore {
            score: self.score,
            new_best,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FinalScore {
    pub(crate) score: u32,
    /// Did this game set a new best score?
    pub(crate) new_best: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_adds_ten() {
        let mut board = Scoreboard::default();
        assert_eq!(board.record_food(), 10);
        assert_eq!(board.record_food(), 20);
        assert_eq!(board.score(), 20);
        assert_eq!(board.best(), 0);
    }

    #[test]
    fn best_score_tracks_maximum() {
        let mut board = Scoreboard::default();
        board.record_food();
        board.record_food();
        assert_eq!(
            board.record_game_over(),
            FinalScore {
                score: 20,
                new_best: true
            }
        );
        assert_eq!(board.best(), 20);

        board.reset();
        assert_eq!(board.score(), 0);
        board.record_food();
        assert_eq!(
            board.record_game_over(),
            FinalScore {
                score: 10,
                new_best: false
            }
        );
        assert_eq!(board.best(), 20);

        board.reset();
        board.record_food();
        board.record_food();
        assert_eq!(
            board.record_game_over(),
            FinalScore {
                score: 20,
                new_best: false
            }
        );
    }

    #[test]
    fn scoreless_game_is_not_a_best() {
        let mut board = Scoreboard::default();
        assert_eq!(
            board.record_game_over(),
            FinalScore {
                score: 0,
                new_best: false
            }
        );
    }
}
