use crate::card::{ACE, Card, KING};
use crate::category::Category;
use crate::error::EvalError;

use super::counts::RankCounts;
use super::{HAND_SIZE, five, sorted_ranks};

/// Classifies a five-card hand.
///
/// Card order does not matter. Aces count as 14 except when completing the
/// wheel (A-2-3-4-5), where they play low for straight detection only.
///
/// # Errors
///
/// Returns [`EvalError::InvalidHandSize`] unless exactly five cards are given.
///
/// # Example
///
/// ```
/// use drawrs::{Card, Category, Suit, classify};
///
/// let wheel = [
///     Card::new(Suit::Spades, 2),
///     Card::new(Suit::Spades, 3),
///     Card::new(Suit::Spades, 4),
///     Card::new(Suit::Spades, 5),
///     Card::new(Suit::Diamonds, 14),
/// ];
/// assert_eq!(classify(&wheel), Ok(Category::Straight));
/// ```
pub fn classify(cards: &[Card]) -> Result<Category, EvalError> {
    let cards = five(cards)?;
    let counts = RankCounts::new(cards);

    if counts.has(4) {
        return Ok(Category::FourOfAKind);
    }
    if counts.has(3) && counts.has(2) {
        return Ok(Category::FullHouse);
    }
    if counts.has(3) {
        return Ok(Category::ThreeOfAKind);
    }
    if counts.ranks_with(2).len() == 2 {
        return Ok(Category::TwoPair);
    }
    if counts.has(2) {
        return Ok(Category::OnePair);
    }

    // All five ranks are distinct from here on.
    let flush = is_flush(cards);
    let straight = is_straight(cards);
    let has_rank = |rank: u8| cards.iter().any(|card| card.rank == rank);

    let category = if flush && straight && has_rank(ACE) && has_rank(KING) {
        Category::RoyalFlush
    } else if flush && straight {
        Category::StraightFlush
    } else if straight {
        Category::Straight
    } else if flush {
        Category::Flush
    } else {
        Category::HighCard
    };

    Ok(category)
}

/// Returns whether all cards share one suit.
#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    cards
        .first()
        .is_some_and(|first| cards.iter().all(|card| card.suit == first.suit))
}

/// Returns whether five cards form a straight.
///
/// The ace-low wheel counts: the highest card is an ace and the next one is a five.
/// Any repeated rank rules a straight out.
#[must_use]
pub fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let ranks = sorted_ranks(cards);
    if ranks.windows(2).any(|pair| pair[0] == pair[1]) {
        return false;
    }
    let (lowest, highest) = (ranks[0], ranks[HAND_SIZE - 1]);

    highest - lowest == 4 || (highest == ACE && ranks[HAND_SIZE - 2] == 5)
}
