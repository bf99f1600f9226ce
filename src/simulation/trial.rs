use crate::Fault;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::evaluation::Evaluator;
use crate::evaluation::Outcome;
use crate::evaluation::Showdown;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// One Monte Carlo sample: complete the board, rank every player, pick
/// the winner.
///
/// Owns its deck outright, so running it never touches another trial.
#[derive(Debug, Clone)]
pub struct Trial {
    index: usize,
    seed: u64,
    deck: Deck,
    board: Board,
    holes: Arc<[Hole]>,
}

impl Trial {
    pub fn new(index: usize, seed: u64, deck: Deck, board: Board, holes: Arc<[Hole]>) -> Self {
        Self {
            index,
            seed,
            deck,
            board,
            holes,
        }
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn run(mut self) -> Result<Outcome, Fault> {
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        let missing = self.board.street()?.n_missing();
        let drawn = self.deck.deal(missing, rng);
        self.board.extend(drawn);
        Deck::unique(self.deck.cards().iter().chain(self.board.cards()))?;
        log::trace!("trial {} board {}", self.index, self.board);
        let mut showdown = Showdown::default();
        for (player, hole) in self.holes.iter().enumerate() {
            let pool = hole
                .cards()
                .into_iter()
                .chain(self.board.cards().iter().copied())
                .collect::<Vec<Card>>();
            let ranking = Evaluator::try_from(pool.as_slice())?.find_ranking();
            log::trace!("Player {} has: {}", player, ranking);
            showdown.register(player, ranking)?;
        }
        let outcome = showdown.resolve()?;
        log::trace!("{}", outcome);
        Ok(outcome)
    }
}
