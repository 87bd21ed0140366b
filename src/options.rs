//! Round configuration options.

use crate::hand::MAX_HAND_SIZE;

/// Configuration options for a draw poker round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drawpoker::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_exchanges(1)
///     .with_max_discard(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Number of discard/redraw exchanges after the initial deal.
    pub exchanges: u8,
    /// Maximum number of cards that may be discarded in one exchange.
    pub max_discard: usize,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            exchanges: 2,
            max_discard: MAX_HAND_SIZE,
        }
    }
}

impl RoundOptions {
    /// Sets the number of exchanges.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_exchanges(3);
    /// assert_eq!(options.exchanges, 3);
    /// ```
    #[must_use]
    pub const fn with_exchanges(mut self, exchanges: u8) -> Self {
        self.exchanges = exchanges;
        self
    }

    /// Sets the discard limit per exchange. Values above five are clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_max_discard(9);
    /// assert_eq!(options.max_discard, 5);
    /// ```
    #[must_use]
    pub const fn with_max_discard(mut self, max_discard: usize) -> Self {
        self.max_discard = if max_discard > MAX_HAND_SIZE {
            MAX_HAND_SIZE
        } else {
            max_discard
        };
        self
    }
}
