//! Showdown outcome.

use core::cmp::Ordering;

/// Result of comparing one hand against another, from the first hand's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The first hand is stronger.
    Won,
    /// The second hand is stronger.
    Lost,
    /// Neither hand is stronger.
    Draw,
}

impl Outcome {
    /// Returns the outcome seen from the other hand.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Won => Self::Lost,
            Self::Lost => Self::Won,
            Self::Draw => Self::Draw,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Won,
            Ordering::Less => Self::Lost,
            Ordering::Equal => Self::Draw,
        }
    }
}
