//! Card types and rank constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in deck-generation order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' | '♥' => Some(Self::Hearts),
            'd' | '♦' => Some(Self::Diamonds),
            'c' | '♣' => Some(Self::Clubs),
            's' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;
/// Rank of an ace. Aces are always 14; only straight detection treats them as low.
pub const ACE: u8 = 14;

/// Lowest rank in a standard deck.
pub const MIN_RANK: u8 = 2;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            JACK => write!(f, "J{}", self.suit.symbol()),
            QUEEN => write!(f, "Q{}", self.suit.symbol()),
            KING => write!(f, "K{}", self.suit.symbol()),
            ACE => write!(f, "A{}", self.suit.symbol()),
            rank => write!(f, "{rank}{}", self.suit.symbol()),
        }
    }
}

/// Parses short notation such as `"As"`, `"Td"`, `"10h"` or `"2♣"`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::InvalidLength)?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(ParseCardError::InvalidLength);
        }

        let suit = Suit::from_letter(suit_char).ok_or(ParseCardError::InvalidSuit)?;
        let rank = match rank_str {
            "J" | "j" => JACK,
            "Q" | "q" => QUEEN,
            "K" | "k" => KING,
            "A" | "a" => ACE,
            "T" | "t" => 10,
            digits => match digits.parse::<u8>() {
                Ok(rank @ MIN_RANK..=10) => rank,
                _ => return Err(ParseCardError::InvalidRank),
            },
        };

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
