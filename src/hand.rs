//! The player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;
use crate::eval::{HandCategory, evaluate};

/// Maximum number of cards a hand may hold.
pub const MAX_HAND_SIZE: usize = 5;

/// A player's hand of up to [`MAX_HAND_SIZE`] cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Full`] if the hand already holds five cards.
    pub fn append(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes the cards at the given 0-based positions and returns them.
    ///
    /// All positions refer to the hand as it was before the call, so
    /// removal happens as a single step. Remaining cards keep their relative
    /// order. A position listed more than once is removed once. The discarded
    /// cards are returned in hand order.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidIndex`] if any position is out of range.
    /// The hand is left unchanged in that case.
    pub fn discard(&mut self, indices: &[usize]) -> Result<Vec<Card>, HandError> {
        let len = self.cards.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(HandError::InvalidIndex { index, len });
        }

        let mut marked = [false; MAX_HAND_SIZE];
        for &index in indices {
            marked[index] = true;
        }

        let (discarded, kept): (Vec<_>, Vec<_>) = self
            .cards
            .drain(..)
            .enumerate()
            .partition(|(position, _)| marked[*position]);
        self.cards = kept.into_iter().map(|(_, card)| card).collect();

        Ok(discarded.into_iter().map(|(_, card)| card).collect())
    }

    /// Classifies the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Incomplete`] unless the hand holds exactly five
    /// cards.
    pub fn evaluate(&self) -> Result<HandCategory, HandError> {
        let cards: &[Card; MAX_HAND_SIZE] = self
            .cards
            .as_slice()
            .try_into()
            .map_err(|_| HandError::Incomplete {
                len: self.cards.len(),
            })?;
        Ok(evaluate(cards))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds five cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_HAND_SIZE
    }

    /// Returns how many cards are needed to fill the hand.
    #[must_use]
    pub fn missing(&self) -> usize {
        MAX_HAND_SIZE.saturating_sub(self.cards.len())
    }
}

/// Parses whitespace-separated discard positions, as typed at a prompt.
///
/// Empty input yields no positions. Range checks are left to
/// [`Hand::discard`].
///
/// # Errors
///
/// Returns [`HandError::InvalidInput`] if any token is not a non-negative
/// integer.
pub fn parse_indices(input: &str) -> Result<Vec<usize>, HandError> {
    input
        .split_whitespace()
        .map(|token| token.parse().map_err(|_| HandError::InvalidInput))
        .collect()
}
