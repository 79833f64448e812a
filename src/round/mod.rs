//! Draw round engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::category::Category;
use crate::deck::Deck;
use crate::error::EvalError;
use crate::hand::Hand;
use crate::options::RoundOptions;

mod draw;
mod showdown;
pub mod state;

pub use state::RoundState;

/// A single-hand five-card draw round.
///
/// The round owns the deck and the hand. It deals five cards, allows one
/// exchange (or a stand), and then shows the hand down against a hand
/// supplied by the caller.
pub struct Round {
    /// Cards in the deck.
    pub deck: Mutex<Deck>,
    /// Round options.
    pub options: RoundOptions,
    /// Current round state.
    pub state: Mutex<RoundState>,
    /// The hand in play.
    hand: Mutex<Hand>,
    /// Cards discarded during the draw.
    discards: Mutex<Vec<Card>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Round {
    /// Creates a new round with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::WaitingForDeal);
    /// assert_eq!(round.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(RoundState::WaitingForDeal),
            hand: Mutex::new(Hand::empty()),
            discards: Mutex::new(Vec::new()),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a clone of the hand in play.
    pub fn hand(&self) -> Hand {
        self.hand.lock().clone()
    }

    /// Returns the cards discarded so far this round.
    pub fn discards(&self) -> Vec<Card> {
        self.discards.lock().clone()
    }

    /// Classifies the hand in play.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidHandSize`] before the deal.
    pub fn classify(&self) -> Result<Category, EvalError> {
        self.hand.lock().classify()
    }

    /// Clears the hand and discards (called at the end of a round).
    ///
    /// The deck is rebuilt and reshuffled when
    /// [`RoundOptions::reshuffle_each_round`] is set; otherwise the next
    /// round keeps drawing from what is left. The round returns to the
    /// `WaitingForDeal` state.
    pub fn clear_round(&self) {
        let hand = self.hand.replace(Hand::empty());
        let discards = self.discards.replace(Vec::new());
        log::debug!(
            "round cleared ({} in hand, {} discarded)",
            hand.len(),
            discards.len()
        );

        if self.options.reshuffle_each_round {
            let mut rng = self.rng.lock();
            self.deck.replace(Deck::shuffled(&mut *rng));
            log::debug!("deck rebuilt and reshuffled");
        }

        *self.state.lock() = RoundState::WaitingForDeal;
    }
}
