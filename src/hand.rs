//! Five-card draw hand representation.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::card::Card;
use crate::category::Category;
use crate::error::{AddError, DiscardError, EvalError};
use crate::eval::{self, HAND_SIZE};
use crate::result::Outcome;

/// Default number of cards that may be discarded or received in one call.
pub const DEFAULT_MAX_EXCHANGE: u8 = 3;

/// Splits `cards` into the cards kept and the cards discarded.
///
/// `positions` are 1-based indices into `cards` and are treated as a set, so
/// repeated positions discard a card only once. Every position is checked
/// against `cards` before anything is split off. Both returned lists keep the
/// original relative order.
///
/// # Errors
///
/// Returns [`DiscardError::TooManyDiscards`] if more than `limit` distinct
/// positions are given, or [`DiscardError::InvalidPosition`] for the first
/// position outside `1..=cards.len()`.
pub fn split_positions(
    cards: &[Card],
    positions: &[usize],
    limit: usize,
) -> Result<(Vec<Card>, Vec<Card>), DiscardError> {
    let positions: BTreeSet<usize> = positions.iter().copied().collect();

    if positions.len() > limit {
        return Err(DiscardError::TooManyDiscards);
    }
    if let Some(&bad) = positions
        .iter()
        .find(|&&position| position == 0 || position > cards.len())
    {
        return Err(DiscardError::InvalidPosition(bad));
    }

    let (removed, kept): (Vec<_>, Vec<_>) = cards
        .iter()
        .enumerate()
        .partition(|(index, _)| positions.contains(&(index + 1)));

    Ok((
        kept.into_iter().map(|(_, &card)| card).collect(),
        removed.into_iter().map(|(_, &card)| card).collect(),
    ))
}

/// A player's hand of at most five cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
    /// Cards that may be discarded or received in one call.
    max_exchange: u8,
}

impl Hand {
    /// Creates a hand from the dealt cards.
    ///
    /// # Errors
    ///
    /// Returns [`AddError::HandOverflow`] if more than five cards are given.
    pub fn new(cards: Vec<Card>) -> Result<Self, AddError> {
        if cards.len() > HAND_SIZE {
            return Err(AddError::HandOverflow);
        }

        Ok(Self {
            cards,
            max_exchange: DEFAULT_MAX_EXCHANGE,
        })
    }

    /// Creates a new empty hand.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: Vec::new(),
            max_exchange: DEFAULT_MAX_EXCHANGE,
        }
    }

    /// Sets how many cards may be discarded or received in one call.
    ///
    /// Values above five are clamped to five.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::Hand;
    ///
    /// let hand = Hand::empty().with_max_exchange(4);
    /// assert_eq!(hand.max_exchange(), 4);
    /// ```
    #[must_use]
    pub fn with_max_exchange(mut self, max_exchange: u8) -> Self {
        self.max_exchange = max_exchange.min(HAND_SIZE as u8);
        self
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns how many cards may be discarded or received in one call.
    #[must_use]
    pub const fn max_exchange(&self) -> u8 {
        self.max_exchange
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds five cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    /// Discards the cards at the given 1-based positions and returns them.
    ///
    /// Positions refer to the hand as it is before the call. The hand is left
    /// untouched if the request is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::TooManyDiscards`] if more positions are given
    /// than the exchange limit allows, or [`DiscardError::InvalidPosition`]
    /// if a position is not in the hand.
    pub fn discard(&mut self, positions: &[usize]) -> Result<Vec<Card>, DiscardError> {
        let (kept, removed) =
            split_positions(&self.cards, positions, usize::from(self.max_exchange))?;
        self.cards = kept;
        log::debug!("discarded {} cards, {} kept", removed.len(), self.cards.len());
        Ok(removed)
    }

    /// Adds cards to the end of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`AddError::TooManyAdded`] if more cards are given than the
    /// exchange limit allows, or [`AddError::HandOverflow`] if the hand would
    /// hold more than five cards.
    pub fn add_cards(&mut self, cards: &[Card]) -> Result<(), AddError> {
        if cards.len() > usize::from(self.max_exchange) {
            return Err(AddError::TooManyAdded);
        }
        if self.cards.len() + cards.len() > HAND_SIZE {
            return Err(AddError::HandOverflow);
        }

        self.cards.extend_from_slice(cards);
        log::debug!("added {} cards, hand holds {}", cards.len(), self.cards.len());
        Ok(())
    }

    /// Classifies the hand.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidHandSize`] unless the hand holds five cards.
    pub fn classify(&self) -> Result<Category, EvalError> {
        eval::classify(&self.cards)
    }

    /// Compares this hand against another.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidHandSize`] unless both hands hold five cards.
    pub fn compare(&self, other: &Self) -> Result<Outcome, EvalError> {
        eval::compare(&self.cards, &other.cards)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self {
            cards: cards.to_vec(),
            max_exchange: DEFAULT_MAX_EXCHANGE,
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::empty()
    }
}
