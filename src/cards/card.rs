use super::rank::Rank;
use super::suit::Suit;

/// A playing card.
///
/// Equality is by `(Rank, Suit)` value, so two independently constructed
/// cards with the same rank and suit are the same card. The derived
/// ordering sorts by rank first, then suit.
///
/// Cards parse from short strings like `"As"` (ace of spades), `"Td"`
/// or `"10d"` (ten of diamonds). Use [`Card::parse`] for several at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Parses whitespace-separated card notations into a vector of cards.
    ///
    /// Cards may also be concatenated without whitespace (`"AhKd"`,
    /// `"10hAs"`). Each card is then read as rank then suit: three
    /// characters for a `10` rank, two otherwise.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .flat_map(Self::tokens)
            .map(|token| Self::try_from(token.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
    fn tokens(word: &str) -> Vec<String> {
        let chars = word.chars().collect::<Vec<char>>();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let n = match chars[i..] {
                ['1', '0', ..] => 3,
                _ => 2,
            };
            let j = chars.len().min(i + n);
            tokens.push(chars[i..j].iter().collect::<String>());
            i = j;
        }
        tokens
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) * 4 + u8::from(c.suit)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
