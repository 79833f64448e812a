//! The 52-card deck.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{ACE, Card, DECK_SIZE, MIN_RANK, Suit};
use crate::error::DrawError;

/// An ordered stack of cards. Cards are drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck holding one of each of the 52 cards.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=ACE {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a standard deck and shuffles it with the given generator.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Creates a shuffled deck from a seed. The same seed always yields the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::Deck;
    ///
    /// assert_eq!(Deck::with_seed(7), Deck::with_seed(7));
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Creates a deck from an explicit card order. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::trace!("shuffled deck of {} cards", self.cards.len());
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.cards.pop().ok_or(DrawError::EmptyDeck)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Draws `count` cards, in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if fewer than `count` cards are left.
    /// The deck is not modified in that case.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count > self.cards.len() {
            return Err(DrawError::EmptyDeck);
        }

        let at = self.cards.len() - count;
        let mut drawn = self.cards.split_off(at);
        drawn.reverse();
        log::trace!("drew {count} cards, {} left", self.cards.len());
        Ok(drawn)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
