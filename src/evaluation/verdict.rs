use crate::Fault;
use crate::cards::Rank;
use std::cmp::Ordering;

/// Result of comparing one hand against another, from the first hand's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Win,
    Tie,
    Lose,
}

impl Verdict {
    /// Single-value rule. Ranks live on the high-Ace scale, so an Ace
    /// beats every other rank without special casing.
    pub fn of(lhs: Rank, rhs: Rank) -> Self {
        Self::from(lhs.cmp(&rhs))
    }
    /// Position-by-position comparison, most significant first. The first
    /// position that is not a tie decides; all ties (or two empty lists)
    /// is a tie.
    pub fn compare(lhs: &[Rank], rhs: &[Rank]) -> Result<Self, Fault> {
        if lhs.len() != rhs.len() {
            return Err(Fault::KickerMismatch(lhs.len(), rhs.len()));
        }
        Ok(lhs
            .iter()
            .zip(rhs.iter())
            .map(|(l, r)| Self::of(*l, *r))
            .find(|v| *v != Self::Tie)
            .unwrap_or(Self::Tie))
    }
}

impl From<Ordering> for Verdict {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Self::Win,
            Ordering::Equal => Self::Tie,
            Ordering::Less => Self::Lose,
        }
    }
}
