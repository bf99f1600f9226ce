use super::category::Category;
use super::verdict::Verdict;
use crate::Fault;
use crate::cards::Card;
use crate::cards::Rank;
use std::cmp::Ordering;

/// One player's best hand in one trial.
///
/// `values` are the ranks that define the category, most significant
/// first (the quad rank, [trips, pair], the five flush ranks, a straight's
/// top, ...). `kickers` are the leftover cards that break ties, strongest
/// first. Either list may be empty depending on the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    category: Category,
    values: Vec<Rank>,
    kickers: Vec<Card>,
}

impl Ranking {
    pub fn new(category: Category, values: Vec<Rank>, kickers: Vec<Card>) -> Self {
        debug_assert!(kickers.len() <= category.n_kickers());
        Self {
            category,
            values,
            kickers,
        }
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn values(&self) -> &[Rank] {
        &self.values
    }
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }
    pub fn kicks(&self) -> Vec<Rank> {
        self.kickers.iter().map(Card::rank).collect()
    }

    /// Compares this hand against `other`.
    ///
    /// A stronger category wins outright. Within a category the primary
    /// values decide first, then the kicker ranks; suits never matter.
    pub fn versus(&self, other: &Self) -> Result<Verdict, Fault> {
        match self.category.cmp(&other.category) {
            Ordering::Less => Ok(Verdict::Win),
            Ordering::Greater => Ok(Verdict::Lose),
            Ordering::Equal => match Verdict::compare(&self.values, &other.values)? {
                Verdict::Tie => Verdict::compare(&self.kicks(), &other.kicks()),
                verdict => Ok(verdict),
            },
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let join = |items: Vec<String>| items.join(" ");
        write!(
            f,
            "{} with cards [{}]",
            self.category,
            join(self.values.iter().map(Rank::to_string).collect())
        )?;
        if !self.kickers.is_empty() {
            write!(
                f,
                ", kickers [{}]",
                join(self.kickers.iter().map(Card::to_string).collect())
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn stronger_category_wins() {
        let pairs = Ranking::new(Category::TwoPair, vec![Rank::Ace, Rank::Three], cards("Kd"));
        let trips = Ranking::new(Category::ThreeOAK, vec![Rank::Two], cards("Kd Qc"));
        assert_eq!(pairs.versus(&trips), Ok(Verdict::Lose));
        assert_eq!(trips.versus(&pairs), Ok(Verdict::Win));
    }

    #[test]
    fn kickers_break_ties() {
        let a = Ranking::new(Category::OnePair, vec![Rank::Nine], cards("Ah Qd 3c"));
        let b = Ranking::new(Category::OnePair, vec![Rank::Nine], cards("As Jd 8c"));
        assert_eq!(a.versus(&b), Ok(Verdict::Win));
    }

    #[test]
    fn suits_do_not_break_ties() {
        let a = Ranking::new(Category::TwoPair, vec![Rank::Six, Rank::Five], cards("2c"));
        let b = Ranking::new(Category::TwoPair, vec![Rank::Six, Rank::Five], cards("2s"));
        assert_eq!(a.versus(&b), Ok(Verdict::Tie));
    }

    #[test]
    fn display() {
        let a = Ranking::new(Category::OnePair, vec![Rank::Ace], cards("7h 6h 5h"));
        assert_eq!(a.to_string(), "One Pair with cards [A], kickers [7h 6h 5h]");
        let b = Ranking::new(Category::Straight, vec![Rank::Five], vec![]);
        assert_eq!(b.to_string(), "Straight with cards [5]");
    }
}
