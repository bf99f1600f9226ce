use crate::Fault;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::simulation::Table;

/// Trials used when none are given and nobody can be asked.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Everything a run needs. Built by the command line, or by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub workers: usize,
    pub trials: usize,
    pub holes: Vec<Hole>,
    pub board: Board,
    pub seed: u64,
}

impl Config {
    /// Rejects settings that cannot produce a run. These are user
    /// mistakes, so they surface as ordinary errors and not as a Fault.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.workers > 0, "worker count must be positive");
        anyhow::ensure!(self.trials > 0, "trial count must be positive");
        anyhow::ensure!(!self.holes.is_empty(), "at least one hand is required");
        anyhow::ensure!(
            self.holes.len() * 2 + 5 <= 52,
            "too many hands for one deck: {}",
            self.holes.len()
        );
        Ok(())
    }

    /// Deals the hands and board out of a fresh deck.
    pub fn table(&self) -> Result<Table, Fault> {
        Table::new(self.holes.clone(), self.board.clone())
    }

    /// A♥2♥, A♣2♣ and T♣A♦ on an empty board.
    pub fn default_holes() -> Vec<Hole> {
        [
            ((Rank::Ace, Suit::H), (Rank::Two, Suit::H)),
            ((Rank::Ace, Suit::C), (Rank::Two, Suit::C)),
            ((Rank::Ten, Suit::C), (Rank::Ace, Suit::D)),
        ]
        .into_iter()
        .map(|(a, b)| Hole::from((Card::from(a), Card::from(b))))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            workers: 2,
            trials: 100,
            holes: Config::default_holes(),
            board: Board::empty(),
            seed: 0,
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(config().validate().is_ok());
        assert_eq!(config().table().unwrap().deck().len(), 46);
        assert_eq!(Config::default_holes()[2].to_string(), "TcAd");
    }

    #[test]
    fn rejects_empty_runs() {
        let mut idle = config();
        idle.workers = 0;
        assert!(idle.validate().is_err());
        let mut empty = config();
        empty.trials = 0;
        assert!(empty.validate().is_err());
        let mut nobody = config();
        nobody.holes.clear();
        assert!(nobody.validate().is_err());
    }

    #[test]
    fn rejects_crowded_tables() {
        let holes = crate::cards::Deck::new()
            .cards()
            .chunks(2)
            .map(|pair| Hole::from((pair[0], pair[1])))
            .collect::<Vec<Hole>>();
        assert!(Config { holes, ..config() }.validate().is_err());
    }

    #[test]
    fn shared_card_faults_at_table() {
        let holes = vec![
            Hole::try_from("AhKd").unwrap(),
            Hole::try_from("AhQc").unwrap(),
        ];
        let config = Config { holes, ..config() };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.table().err(),
            Some(Fault::DuplicateCard(Card::try_from("Ah").unwrap()))
        );
    }
}
