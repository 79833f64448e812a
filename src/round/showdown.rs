use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::result::Outcome;

use super::{Round, RoundState};

impl Round {
    /// Shows the hand down against `opponent`.
    ///
    /// The outcome is from this round's hand's point of view. The round stays
    /// in the `Showdown` state until [`Round::clear_round`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw is not over yet, or if `opponent` does not
    /// hold exactly five cards.
    pub fn showdown(&self, opponent: &Hand) -> Result<Outcome, ShowdownError> {
        if *self.state.lock() != RoundState::Showdown {
            return Err(ShowdownError::InvalidState);
        }

        let hand = self.hand.lock().clone();
        let outcome = hand.compare(opponent)?;
        log::debug!("showdown: {outcome:?}");
        Ok(outcome)
    }
}
