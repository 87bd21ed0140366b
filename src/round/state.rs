//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial five cards to be dealt.
    Dealing,
    /// Hand dealt; the player may exchange cards.
    Exchanging,
    /// No exchanges remain. The hand is final.
    Finished,
}
