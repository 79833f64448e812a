use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealError, ExchangeError};
use crate::eval::HAND_SIZE;
use crate::hand::Hand;

use super::{Round, RoundState};

impl Round {
    /// Deals five cards to the hand and opens the draw.
    ///
    /// Returns a clone of the dealt hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a deal or the deck
    /// holds fewer than five cards.
    pub fn deal(&self) -> Result<Hand, DealError> {
        let mut state = self.state.lock();
        if *state != RoundState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        let cards: [Card; HAND_SIZE] = self
            .deck
            .lock()
            .draw_many(HAND_SIZE)
            .ok()
            .and_then(|cards| cards.try_into().ok())
            .ok_or(DealError::NotEnoughCards)?;
        let hand = Hand::from(cards).with_max_exchange(self.options.max_exchange);

        *self.hand.lock() = hand.clone();
        *state = RoundState::Drawing;
        drop(state);

        log::debug!("dealt hand, draw open");
        Ok(hand)
    }

    /// Discards the cards at the given 1-based positions, draws the same
    /// number of replacements, and closes the draw.
    ///
    /// Returns the replacement cards in draw order. If the request is rejected
    /// the hand, the deck, and the round state are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the draw, the discard request
    /// is invalid, or the deck cannot supply the replacements.
    pub fn exchange(&self, positions: &[usize]) -> Result<Vec<Card>, ExchangeError> {
        let mut state = self.state.lock();
        if *state != RoundState::Drawing {
            return Err(ExchangeError::InvalidState);
        }

        let mut hand = self.hand.lock();
        let mut deck = self.deck.lock();

        let mut next_hand = hand.clone();
        let mut next_deck = deck.clone();
        let discarded = next_hand.discard(positions)?;
        let drawn = next_deck.draw_many(discarded.len())?;
        next_hand.add_cards(&drawn)?;

        *hand = next_hand;
        *deck = next_deck;
        self.discards.lock().extend_from_slice(&discarded);
        *state = RoundState::Showdown;

        log::debug!("exchanged {} cards, draw closed", drawn.len());
        Ok(drawn)
    }

    /// Keeps the hand as dealt and closes the draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the draw.
    pub fn stand(&self) -> Result<(), ExchangeError> {
        let mut state = self.state.lock();
        if *state != RoundState::Drawing {
            return Err(ExchangeError::InvalidState);
        }

        *state = RoundState::Showdown;
        drop(state);

        log::debug!("stood pat, draw closed");
        Ok(())
    }
}
