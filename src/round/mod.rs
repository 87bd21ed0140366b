//! Round engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::eval::HandCategory;
use crate::hand::Hand;
use crate::options::RoundOptions;

mod exchange;
pub mod state;

pub use state::RoundState;

/// A single five-card draw round for one player.
///
/// The round owns the deck and the hand. Cards move from the deck into the
/// hand on [`Round::deal`] and on each [`Round::exchange`]; discarded cards
/// leave play.
#[derive(Debug, Clone)]
pub struct Round {
    /// Round options.
    options: RoundOptions,
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand.
    hand: Hand,
    /// Current round state.
    state: RoundState,
    /// Exchanges the player may still make.
    exchanges_remaining: u8,
    /// Category of the hand after the last deal or exchange.
    category: Option<HandCategory>,
}

impl Round {
    /// Creates a new round with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// assert_eq!(round.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        log::debug!("new round with seed {seed}");
        Self::with_deck(options, deck)
    }

    /// Creates a new round that deals from `deck` in its current order.
    #[must_use]
    pub const fn with_deck(options: RoundOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            hand: Hand::new(),
            state: RoundState::Dealing,
            exchanges_remaining: options.exchanges,
            category: None,
        }
    }

    /// Draws cards until the hand is full and returns the drawn cards.
    ///
    /// An empty deck ends the round: the hand stays short and the state
    /// becomes [`RoundState::Finished`].
    fn fill_hand(&mut self) -> Result<Vec<Card>, RoundError> {
        let mut drawn = Vec::with_capacity(self.hand.missing());
        while !self.hand.is_full() {
            let card = self.deck.draw().inspect_err(|_| {
                log::debug!("deck exhausted with {} card(s) in hand", self.hand.len());
                self.state = RoundState::Finished;
            })?;
            self.hand.append(card)?;
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Moves to the next state after a deal or exchange.
    fn settle(&mut self, category: HandCategory) {
        self.category = Some(category);
        self.state = if self.exchanges_remaining == 0 {
            RoundState::Finished
        } else {
            RoundState::Exchanging
        };
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the category after the last deal or exchange.
    ///
    /// Returns `None` before the deal.
    #[must_use]
    pub const fn category(&self) -> Option<HandCategory> {
        self.category
    }

    /// Returns the number of exchanges still allowed.
    #[must_use]
    pub const fn exchanges_remaining(&self) -> u8 {
        self.exchanges_remaining
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
