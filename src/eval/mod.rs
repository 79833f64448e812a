//! Hand classification and comparison.
//!
//! Both operations are pure functions over a five-card snapshot; [`Hand`](crate::Hand)
//! exposes them as methods.

use crate::card::Card;
use crate::error::EvalError;

mod classify;
mod compare;
mod counts;

pub use classify::{classify, is_flush, is_straight};
pub use compare::compare;
pub use counts::RankCounts;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

fn five(cards: &[Card]) -> Result<&[Card; HAND_SIZE], EvalError> {
    cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize(cards.len()))
}

fn sorted_ranks(cards: &[Card; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut ranks = cards.map(|card| card.rank);
    ranks.sort_unstable();
    ranks
}
