use crate::cards::Card;

/// An invariant violation.
///
/// These never come from bad user input: the configuration layer rejects
/// that with ordinary errors before a run starts. A `Fault` means the
/// bookkeeping of decks, boards or rankings went wrong, so the run that
/// raised it is aborted rather than retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Board holds a card count other than 0, 3, 4 or 5.
    BoardSize(usize),
    /// The same card was seen twice, or a card to remove was already gone.
    DuplicateCard(Card),
    /// A player's evaluation pool did not hold exactly seven cards.
    PoolSize(usize),
    /// Two same-category rankings carried tie-break lists of different lengths.
    KickerMismatch(usize, usize),
    /// A trial ended with no winner and no tie.
    Unresolved,
    /// The worker pool stopped producing outcomes before every trial reported.
    Disconnected,
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoardSize(n) => write!(f, "unexpected number of community cards: {}", n),
            Self::DuplicateCard(card) => write!(f, "deck has duplicate card: {}", card),
            Self::PoolSize(n) => write!(f, "player should have 7 cards available, found {}", n),
            Self::KickerMismatch(a, b) => write!(f, "kicker length mismatch: {} vs {}", a, b),
            Self::Unresolved => write!(f, "trial outcome was never resolved"),
            Self::Disconnected => write!(f, "worker pool disconnected before all trials reported"),
        }
    }
}

impl std::error::Error for Fault {}
