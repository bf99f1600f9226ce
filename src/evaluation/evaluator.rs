use super::category::Category;
use super::ranking::Ranking;
use crate::Fault;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// Finds the best 5-card ranking among exactly seven cards.
///
/// Categories are tried strongest first and the first match is returned.
/// The checks are mutually exclusive in that order, so the first match
/// is also the correct one. Every detector is a plain function over a
/// card slice so they can be exercised on their own.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator([Card; 7]);

impl From<[Card; 7]> for Evaluator {
    fn from(cards: [Card; 7]) -> Self {
        Self(cards)
    }
}
impl TryFrom<&[Card]> for Evaluator {
    type Error = Fault;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; 7]>::try_from(cards)
            .map(Self)
            .map_err(|_| Fault::PoolSize(cards.len()))
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    fn find_straight_flush(&self) -> Option<Ranking> {
        straight_flush(&self.0)
            .map(|top| Ranking::new(Category::StraightFlush, vec![top], vec![]))
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        multiples(&self.0, 4, 1)
            .map(|(rank, kicks)| Ranking::new(Category::FourOAK, vec![rank], kicks))
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        full_house(&self.0)
            .map(|[trips, pair]| Ranking::new(Category::FullHouse, vec![trips, pair], vec![]))
    }
    fn find_flush(&self) -> Option<Ranking> {
        flush(&self.0).map(|ranks| Ranking::new(Category::Flush, ranks, vec![]))
    }
    fn find_straight(&self) -> Option<Ranking> {
        straight(&self.0).map(|top| Ranking::new(Category::Straight, vec![top], vec![]))
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        multiples(&self.0, 3, 2)
            .map(|(rank, kicks)| Ranking::new(Category::ThreeOAK, vec![rank], kicks))
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        two_pair(&self.0)
            .map(|([hi, lo], kicks)| Ranking::new(Category::TwoPair, vec![hi, lo], kicks))
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        multiples(&self.0, 2, 3)
            .map(|(rank, kicks)| Ranking::new(Category::OnePair, vec![rank], kicks))
    }
    fn find_1_oak(&self) -> Ranking {
        Ranking::new(Category::HighCard, vec![], descending(self.0.to_vec(), 5))
    }
}

/// Highest rank held exactly `n` times, with the `k` best other cards.
///
/// Ranks held any other number of times are ignored, so a pair search
/// does not see trips. Kickers are every card of a different rank,
/// strongest first, cut to `k`.
pub fn multiples(cards: &[Card], n: usize, k: usize) -> Option<(Rank, Vec<Card>)> {
    let mut counts = [0usize; 13];
    for card in cards {
        counts[u8::from(card.rank()) as usize] += 1;
    }
    let rank = Rank::all()
        .into_iter()
        .rev()
        .find(|r| counts[u8::from(*r) as usize] == n)?;
    let rest = cards
        .iter()
        .copied()
        .filter(|c| c.rank() != rank)
        .collect::<Vec<Card>>();
    Some((rank, descending(rest, k)))
}

/// Two highest pairs, higher first, and the best remaining card.
pub fn two_pair(cards: &[Card]) -> Option<([Rank; 2], Vec<Card>)> {
    let (hi, rest) = multiples(cards, 2, cards.len().saturating_sub(2))?;
    let (lo, kick) = multiples(&rest, 2, 1)?;
    Some(([hi, lo], kick))
}

/// Best trips plus the best pair among what is left.
/// A second set of trips counts as the pair.
pub fn full_house(cards: &[Card]) -> Option<[Rank; 2]> {
    let (trips, rest) = multiples(cards, 3, cards.len().saturating_sub(3))?;
    let (pair, _) = multiples(&rest, 3, 0).or_else(|| multiples(&rest, 2, 0))?;
    Some([trips, pair])
}

/// Top of the highest run of five consecutive ranks.
///
/// Works on the 13-bit rank mask: after four shift-and-mask rounds only
/// the tops of 5-long runs survive, and the most significant survivor is
/// the best straight. An Ace also plays low, which only matters for the
/// wheel, so that one is matched against a fixed mask.
pub fn straight(cards: &[Card]) -> Option<Rank> {
    let ranks = cards
        .iter()
        .map(|c| u16::from(c.rank()))
        .fold(0u16, |a, b| a | b);
    let mut bits = ranks;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    if bits > 0 {
        Some(Rank::from(bits))
    } else if WHEEL == (WHEEL & ranks) {
        Some(LOWEST_STRAIGHT_RANK)
    } else {
        None
    }
}

/// Five highest ranks of the suit holding at least five cards, highest first.
pub fn flush(cards: &[Card]) -> Option<Vec<Rank>> {
    let suit = flush_suit(cards)?;
    let mut ranks = cards
        .iter()
        .filter(|c| c.suit() == suit)
        .map(Card::rank)
        .collect::<Vec<Rank>>();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks.truncate(5);
    Some(ranks)
}

/// Top of the best straight made only from cards of the flush suit.
pub fn straight_flush(cards: &[Card]) -> Option<Rank> {
    let suit = flush_suit(cards)?;
    let suited = cards
        .iter()
        .copied()
        .filter(|c| c.suit() == suit)
        .collect::<Vec<Card>>();
    straight(&suited)
}

fn flush_suit(cards: &[Card]) -> Option<Suit> {
    Suit::all()
        .into_iter()
        .find(|s| cards.iter().filter(|c| c.suit() == *s).count() >= 5)
}

fn descending(mut cards: Vec<Card>, k: usize) -> Vec<Card> {
    cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
    cards.truncate(k);
    cards
}
