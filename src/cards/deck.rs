use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Fault;
use rand::Rng;
use std::collections::HashSet;

/// The cards still available to be dealt.
///
/// An owned, indexable collection. Removal swaps the last card into the
/// vacated slot and shrinks by one, so it is O(1) once the position is
/// known and does not preserve order; nothing depends on that order.
///
/// Removal is destructive, so a Deck must never be shared between trials.
/// Each trial clones its own copy from the read-only setup deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full 52-card deck.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|suit| Rank::all().into_iter().map(move |rank| (rank, suit)))
                .map(Card::from)
                .collect(),
        )
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes the card at `index` by swapping in the last card.
    pub fn remove_at(&mut self, index: usize) -> Card {
        self.0.swap_remove(index)
    }
    /// Removes a specific card. Returns false if it was not in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.0.iter().position(|c| *c == card) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }
    /// Draws and removes one uniformly random card.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(!self.is_empty());
        let index = rng.random_range(0..self.len());
        self.remove_at(index)
    }
    /// Draws `n` uniformly random cards without replacement.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<Card> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
    /// Fails on the first card that appears more than once.
    pub fn check(&self) -> Result<(), Fault> {
        Self::unique(self.0.iter())
    }
    /// Fails on the first card repeated anywhere across `cards`.
    pub fn unique<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<(), Fault> {
        let mut seen = HashSet::with_capacity(52);
        cards
            .into_iter()
            .find(|card| !seen.insert(**card))
            .map_or(Ok(()), |card| Err(Fault::DuplicateCard(*card)))
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn full_deck_is_healthy() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.check(), Ok(()));
    }

    #[test]
    fn duplicate_is_unhealthy() {
        let mut cards = Vec::<Card>::from(Deck::new());
        cards[1] = cards[0];
        let deck = Deck::from(cards.clone());
        assert_eq!(deck.check(), Err(Fault::DuplicateCard(cards[0])));
    }

    #[test]
    fn removal_swaps_last() {
        let mut deck = Deck::new();
        let last = deck.cards()[51];
        deck.remove_at(0);
        assert_eq!(deck.len(), 51);
        assert_eq!(deck.cards()[0], last);
        assert_eq!(deck.check(), Ok(()));
    }

    #[test]
    fn removal_by_value() {
        let mut deck = Deck::new();
        let cards = Card::parse("Ah 2h Ac 2c Tc Ad").unwrap();
        for card in cards.iter() {
            assert!(deck.remove(*card));
        }
        assert_eq!(deck.len(), 52 - cards.len());
        assert_eq!(deck.check(), Ok(()));
        assert!(cards.iter().all(|c| !deck.contains(c)));
        assert!(!deck.remove(cards[0]));
    }

    #[test]
    fn deal_is_disjoint() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let dealt = deck.deal(5, rng);
        assert_eq!(dealt.len(), 5);
        assert_eq!(deck.len(), 47);
        assert!(dealt.iter().all(|c| !deck.contains(c)));
        assert_eq!(Deck::unique(dealt.iter().chain(deck.cards())), Ok(()));
        assert_eq!(deck.check(), Ok(()));
    }

    #[test]
    fn deal_nothing() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        assert!(deck.deal(0, rng).is_empty());
        assert_eq!(deck, Deck::new());
    }
}
