//! A five-card draw poker engine with optional `no_std` support.
//!
//! The crate provides the card primitives, a 52-card [`Deck`], a player
//! [`Hand`], the [`evaluate`] function that classifies five cards into a
//! [`HandCategory`], and a [`Round`] type that runs the deal and
//! discard/redraw flow.
//!
//! # Example
//!
//! ```
//! use drawpoker::{Round, RoundOptions, RoundState};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! let category = round.deal().unwrap();
//! println!("dealt {category}");
//!
//! let exchange = round.exchange(&[0, 1]).unwrap();
//! assert_eq!(exchange.drawn.len(), 2);
//! assert_eq!(round.hand().len(), 5);
//! assert_eq!(round.exchanges_remaining(), 1);
//! assert_eq!(round.state(), RoundState::Exchanging);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{
    Card, DECK_SIZE, Rank, Suit, compare_for_ranking, rank_label, ranking_value, raw_ordinal,
    suit_symbol,
};
pub use deck::Deck;
pub use error::{CardError, DeckError, HandError, RoundError};
pub use eval::{HandCategory, evaluate};
pub use hand::{Hand, MAX_HAND_SIZE, parse_indices};
pub use options::RoundOptions;
pub use result::ExchangeResult;
pub use round::{Round, RoundState};
