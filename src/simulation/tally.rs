use crate::Probability;
use crate::evaluation::Outcome;

/// Running count of trial outcomes.
///
/// A tie adds to no player's wins. Split probability is whatever share
/// of trials no single player won.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<usize>,
    total: usize,
    count: usize,
    trials: usize,
}

impl Tally {
    pub fn new(players: usize, trials: usize) -> Self {
        Self {
            wins: vec![0; players],
            total: 0,
            count: 0,
            trials,
        }
    }
    pub fn witness(&mut self, outcome: Outcome) {
        if let Outcome::Winner(player) = outcome {
            self.wins[player] += 1;
            self.total += 1;
        }
        self.count += 1;
    }
    /// Outcomes witnessed so far.
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn is_complete(&self) -> bool {
        self.count >= self.trials
    }
    pub fn players(&self) -> usize {
        self.wins.len()
    }
    pub fn wins(&self, player: usize) -> usize {
        self.wins[player]
    }
    pub fn win_probability(&self, player: usize) -> Probability {
        self.percent(self.wins[player])
    }
    pub fn split_probability(&self) -> Probability {
        self.percent(self.trials - self.total.min(self.trials))
    }
    fn percent(&self, n: usize) -> Probability {
        match self.trials {
            0 => 0.,
            t => n as Probability / t as Probability * 100.,
        }
    }
}
