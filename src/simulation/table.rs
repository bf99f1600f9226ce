use super::trial::Trial;
use crate::Fault;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hole;
use std::sync::Arc;

/// Golden-ratio increment used to spread trial seeds apart.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// The fixed setup of a run: every player's hole cards, the pre-dealt
/// board, and the deck that remains once both are taken out.
///
/// Built once and read-only afterwards. Each [`Trial`] gets its own copy
/// of the remaining deck, so nothing here is ever mutated by workers.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    board: Board,
    holes: Arc<[Hole]>,
}

impl Table {
    pub fn new(holes: Vec<Hole>, board: Board) -> Result<Self, Fault> {
        board.street()?;
        let mut deck = Deck::new();
        for card in holes
            .iter()
            .flat_map(Hole::cards)
            .chain(board.cards().iter().copied())
        {
            if !deck.remove(card) {
                return Err(Fault::DuplicateCard(card));
            }
        }
        deck.check()?;
        Ok(Self {
            deck,
            board,
            holes: Arc::from(holes),
        })
    }
    pub fn players(&self) -> usize {
        self.holes.len()
    }
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deals the `index`-th trial of a run seeded with `seed`.
    ///
    /// The trial's private seed depends only on those two numbers, so the
    /// same run replays identically whatever worker picks it up.
    pub fn trial(&self, seed: u64, index: usize) -> Trial {
        Trial::new(
            index,
            seed ^ (index as u64).wrapping_add(1).wrapping_mul(SEED_STRIDE),
            self.deck.clone(),
            self.board.clone(),
            self.holes.clone(),
        )
    }
}
