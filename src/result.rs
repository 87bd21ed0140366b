//! Exchange result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::eval::HandCategory;

/// Result of a single discard/redraw exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResult {
    /// Cards removed from the hand, in their former hand order.
    pub discarded: Vec<Card>,
    /// Replacement cards, in draw order.
    pub drawn: Vec<Card>,
    /// Category of the hand after the exchange.
    pub category: HandCategory,
}
