//! Error types for card, deck, hand, and round operations.

use thiserror::Error;

/// Errors that can occur when building a card from untyped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank ordinal outside 1..=13.
    #[error("invalid rank ordinal {0}, expected 1..=13")]
    InvalidRank(u8),
    /// Text is not a rank label followed by a suit.
    #[error("malformed card text")]
    Parse,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("the deck is already empty")]
    Empty,
}

/// Errors that can occur during hand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand already holds the maximum number of cards.
    #[error("the hand is already full")]
    Full,
    /// A discard index is outside the current hand.
    #[error("index {index} is out of range for a hand of {len} cards")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The hand must hold five cards to be evaluated.
    #[error("cannot evaluate a hand of {len} cards")]
    Incomplete {
        /// Number of cards in the hand.
        len: usize,
    },
    /// Discard input is not a list of non-negative integers.
    #[error("discard input must be whitespace-separated integers")]
    InvalidInput,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// More cards discarded than the round allows.
    #[error("cannot discard {requested} cards, the limit is {max}")]
    TooManyDiscards {
        /// Number of distinct positions requested.
        requested: usize,
        /// Configured discard limit.
        max: usize,
    },
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A hand operation failed.
    #[error(transparent)]
    Hand(#[from] HandError),
}
