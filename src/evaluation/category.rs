/// The nine mutually exclusive hand categories.
///
/// Discriminants follow the usual table order: 1 is the strongest
/// category and 9 the weakest, so a lower `Category` beats a higher one.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Category {
    StraightFlush = 1,
    FourOAK = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOAK = 6,
    TwoPair = 7,
    OnePair = 8,
    HighCard = 9,
}

impl Category {
    /// Number of kicker cards that break ties within this category.
    pub const fn n_kickers(&self) -> usize {
        match self {
            Self::HighCard => 5,
            Self::OnePair => 3,
            Self::ThreeOAK => 2,
            Self::FourOAK | Self::TwoPair => 1,
            _ => 0,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StraightFlush => "Straight Flush",
            Self::FourOAK => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOAK => "Three of a Kind",
            Self::TwoPair => "Two Pairs",
            Self::OnePair => "One Pair",
            Self::HighCard => "High Card",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
