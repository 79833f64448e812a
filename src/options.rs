//! Round configuration options.

use crate::hand::DEFAULT_MAX_EXCHANGE;

/// Configuration options for a draw poker round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drawrs::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_max_exchange(3)
///     .with_reshuffle_each_round(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Cards that may be discarded and redrawn in one exchange.
    pub max_exchange: u8,
    /// Whether a fresh shuffled deck is used for every round.
    /// When disabled, later rounds keep drawing from the same deck.
    pub reshuffle_each_round: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            max_exchange: DEFAULT_MAX_EXCHANGE,
            reshuffle_each_round: true,
        }
    }
}

impl RoundOptions {
    /// Sets how many cards may be exchanged in the draw.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_max_exchange(4);
    /// assert_eq!(options.max_exchange, 4);
    /// ```
    #[must_use]
    pub const fn with_max_exchange(mut self, max_exchange: u8) -> Self {
        self.max_exchange = max_exchange;
        self
    }

    /// Sets whether each round starts from a fresh shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_reshuffle_each_round(false);
    /// assert_eq!(options.reshuffle_each_round, false);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_each_round(mut self, reshuffle: bool) -> Self {
        self.reshuffle_each_round = reshuffle;
        self
    }
}
