//! Rank-frequency analysis.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;

/// How many times each rank occurs in a set of cards.
#[derive(Debug, Clone)]
pub struct RankCounts {
    counts: HashMap<u8, u8>,
}

impl RankCounts {
    /// Counts the ranks of the given cards.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = HashMap::with_capacity(cards.len());
        for card in cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns whether some rank occurs exactly `count` times.
    #[must_use]
    pub fn has(&self, count: u8) -> bool {
        self.counts.values().any(|&c| c == count)
    }

    /// Returns the ranks occurring exactly `count` times, highest first.
    #[must_use]
    pub fn ranks_with(&self, count: u8) -> Vec<u8> {
        let mut ranks: Vec<u8> = self
            .counts
            .iter()
            .filter(|&(_, &c)| c == count)
            .map(|(&rank, _)| rank)
            .collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }

    /// Returns the highest rank occurring exactly `count` times.
    #[must_use]
    pub fn rank_with(&self, count: u8) -> Option<u8> {
        self.counts
            .iter()
            .filter(|&(_, &c)| c == count)
            .map(|(&rank, _)| rank)
            .max()
    }
}
