use core::cmp::Ordering;

use crate::card::Card;
use crate::category::Category;
use crate::error::EvalError;
use crate::result::Outcome;

use super::classify::classify;
use super::counts::RankCounts;
use super::{HAND_SIZE, five, sorted_ranks};

/// Compares two five-card hands, from `ours`'s point of view.
///
/// A stronger category always wins. Within a category the tiebreak depends
/// on the category:
///
/// - royal flush: always a draw
/// - straight and straight flush: highest card (a wheel counts as ace-high)
/// - four of a kind: the quad rank
/// - full house: the trip rank, then the pair rank
/// - three of a kind: the trip rank only
/// - two pair: high pair, low pair, then the kicker
/// - one pair: the pair, then the three kickers from the top down
/// - flush and high card: all five cards from the top down
///
/// # Errors
///
/// Returns [`EvalError::InvalidHandSize`] unless both hands hold exactly five cards.
pub fn compare(ours: &[Card], theirs: &[Card]) -> Result<Outcome, EvalError> {
    let ours = five(ours)?;
    let theirs = five(theirs)?;

    let category = classify(ours)?;
    let other = classify(theirs)?;
    if category != other {
        return Ok(category.cmp(&other).into());
    }

    Ok(tiebreak(category, ours, theirs).into())
}

fn tiebreak(
    category: Category,
    ours: &[Card; HAND_SIZE],
    theirs: &[Card; HAND_SIZE],
) -> Ordering {
    let (a, b) = (RankCounts::new(ours), RankCounts::new(theirs));

    match category {
        Category::RoyalFlush => Ordering::Equal,
        // The wheel compares on its raw ace (14), not as a five-high straight.
        Category::StraightFlush | Category::Straight => high_card(ours).cmp(&high_card(theirs)),
        Category::FourOfAKind => a.rank_with(4).cmp(&b.rank_with(4)),
        Category::FullHouse => a
            .rank_with(3)
            .cmp(&b.rank_with(3))
            .then_with(|| a.rank_with(2).cmp(&b.rank_with(2))),
        Category::ThreeOfAKind => a.rank_with(3).cmp(&b.rank_with(3)),
        Category::TwoPair => a
            .ranks_with(2)
            .cmp(&b.ranks_with(2))
            .then_with(|| a.ranks_with(1).cmp(&b.ranks_with(1))),
        Category::OnePair => a
            .rank_with(2)
            .cmp(&b.rank_with(2))
            .then_with(|| a.ranks_with(1).cmp(&b.ranks_with(1))),
        Category::Flush | Category::HighCard => descending(ours).cmp(&descending(theirs)),
    }
}

fn high_card(cards: &[Card; HAND_SIZE]) -> u8 {
    sorted_ranks(cards)[HAND_SIZE - 1]
}

fn descending(cards: &[Card; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut ranks = sorted_ranks(cards);
    ranks.reverse();
    ranks
}
