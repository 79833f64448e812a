//! A five-card draw poker engine with optional `no_std` support.
//!
//! The crate classifies five-card hands into poker categories, breaks ties
//! between hands of the same category, and provides the deck and hand
//! bookkeeping of a draw round (deal, discard, redraw). A [`Round`] type ties
//! these together for a single hand.
//!
//! # Example
//!
//! ```
//! use drawrs::{Card, Category, Hand, Outcome, Suit};
//!
//! let royal = Hand::from([
//!     Card::new(Suit::Spades, 14),
//!     Card::new(Suit::Spades, 13),
//!     Card::new(Suit::Spades, 12),
//!     Card::new(Suit::Spades, 11),
//!     Card::new(Suit::Spades, 10),
//! ]);
//! let straight_flush = Hand::from([
//!     Card::new(Suit::Spades, 9),
//!     Card::new(Suit::Spades, 13),
//!     Card::new(Suit::Spades, 12),
//!     Card::new(Suit::Spades, 11),
//!     Card::new(Suit::Spades, 10),
//! ]);
//!
//! assert_eq!(royal.classify(), Ok(Category::RoyalFlush));
//! assert_eq!(royal.compare(&straight_flush), Ok(Outcome::Won));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
mod sync;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use category::Category;
pub use deck::Deck;
pub use error::{
    AddError, DealError, DiscardError, DrawError, EvalError, ExchangeError, ParseCardError,
    ShowdownError,
};
pub use eval::{HAND_SIZE, classify, compare};
pub use hand::{DEFAULT_MAX_EXCHANGE, Hand, split_positions};
pub use options::RoundOptions;
pub use result::Outcome;
pub use round::{Round, RoundState};
