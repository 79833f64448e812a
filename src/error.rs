//! Error types for deck, hand, and round operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when discarding cards from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// More positions were requested than may be discarded at once.
    #[error("can't discard more than the exchange limit")]
    TooManyDiscards,
    /// A position does not refer to a card in the hand.
    #[error("can't discard card not in hand (position {0})")]
    InvalidPosition(usize),
}

/// Errors that can occur when adding cards to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    /// More cards were offered than may be received at once.
    #[error("can't receive more than the exchange limit")]
    TooManyAdded,
    /// The hand would hold more than five cards.
    #[error("can't have more than 5 cards")]
    HandOverflow,
}

/// Errors that can occur when classifying or comparing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand does not hold exactly five cards.
    #[error("hand holds {0} cards, expected 5")]
    InvalidHandSize(usize),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is too short to hold a rank and a suit.
    #[error("card notation needs a rank and a suit")]
    InvalidLength,
    /// Unknown rank.
    #[error("unknown rank")]
    InvalidRank,
    /// Unknown suit.
    #[error("unknown suit")]
    InvalidSuit,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during the draw (discard and replace) phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Invalid round state for exchanging cards.
    #[error("invalid round state for exchanging cards")]
    InvalidState,
    /// The discard request was rejected.
    #[error(transparent)]
    Discard(#[from] DiscardError),
    /// The replacement cards could not be added.
    #[error(transparent)]
    Add(#[from] AddError),
    /// The deck ran out of replacement cards.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// One of the hands could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
