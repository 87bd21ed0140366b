use alloc::vec::Vec;

use crate::error::RoundError;
use crate::eval::HandCategory;
use crate::hand::MAX_HAND_SIZE;
use crate::result::ExchangeResult;

use super::{Round, RoundState};

impl Round {
    /// Deals the initial five cards and classifies the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state or the deck
    /// runs out of cards. Running out finishes the round.
    pub fn deal(&mut self) -> Result<HandCategory, RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }

        self.fill_hand()?;
        let category = self.hand.evaluate()?;
        log::debug!("dealt {:?}: {category}", self.hand.cards());

        self.settle(category);
        Ok(category)
    }

    /// Discards the cards at `indices`, draws replacements, and classifies
    /// the new hand.
    ///
    /// An empty `indices` keeps the hand as it is but still uses up one
    /// exchange. Repeated positions count once.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the exchanging state, more
    /// cards are discarded than the options allow, a position is out of
    /// range, or the deck runs out of cards. The hand is unchanged unless
    /// the deck runs out while redrawing, which finishes the round with a
    /// short hand.
    pub fn exchange(&mut self, indices: &[usize]) -> Result<ExchangeResult, RoundError> {
        if self.state != RoundState::Exchanging {
            return Err(RoundError::InvalidState);
        }

        let mut marked = [false; MAX_HAND_SIZE];
        for &index in indices {
            if let Some(slot) = marked.get_mut(index) {
                *slot = true;
            }
        }
        let requested = marked.iter().filter(|&&m| m).count();
        if requested > self.options.max_discard {
            return Err(RoundError::TooManyDiscards {
                requested,
                max: self.options.max_discard,
            });
        }

        let discarded = self.hand.discard(indices)?;
        let drawn: Vec<_> = self.fill_hand()?;
        let category = self.hand.evaluate()?;
        log::debug!(
            "exchanged {} card(s), now {:?}: {category}",
            discarded.len(),
            self.hand.cards()
        );

        self.exchanges_remaining -= 1;
        self.settle(category);

        Ok(ExchangeResult {
            discarded,
            drawn,
            category,
        })
    }
}
