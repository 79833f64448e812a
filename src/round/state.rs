//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial five cards to be dealt.
    WaitingForDeal,
    /// The hand may exchange cards or stand.
    Drawing,
    /// The draw is over and the hand can be shown down.
    Showdown,
}
