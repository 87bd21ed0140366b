//! Five-card hand classification.

use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::card::{Card, Rank, Suit, raw_ordinal};

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No matching ranks, no straight, no flush.
    NoPair,
    /// Two cards of one rank.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks in mixed suits.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks in one suit.
    StraightFlush,
    /// Ten through Ace in one suit.
    RoyalStraightFlush,
}

impl HandCategory {
    /// Human-readable name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoPair => "No Pair",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalStraightFlush => "Royal Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const BROADWAY: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

/// Tallies of one five-card hand.
struct Tally {
    rank_counts: HashMap<Rank, u8>,
    distinct_suits: usize,
    /// Raw ordinals (Ace = 1).
    min_ordinal: u8,
    max_ordinal: u8,
}

impl Tally {
    fn new(cards: &[Card; 5]) -> Self {
        let mut rank_counts = HashMap::new();
        for card in cards {
            *rank_counts.entry(card.rank).or_insert(0) += 1;
        }
        let suits: HashSet<Suit> = cards.iter().map(|card| card.suit).collect();

        let ordinals = cards.iter().map(|card| raw_ordinal(card.rank));
        let min_ordinal = ordinals.clone().min().unwrap_or(0);
        let max_ordinal = ordinals.max().unwrap_or(0);

        Self {
            rank_counts,
            distinct_suits: suits.len(),
            min_ordinal,
            max_ordinal,
        }
    }

    fn distinct_ranks(&self) -> usize {
        self.rank_counts.len()
    }

    fn has_count(&self, count: u8) -> bool {
        self.rank_counts.values().any(|&c| c == count)
    }

    /// Whether the set of ranks present equals `ranks` exactly.
    fn ranks_are(&self, ranks: &[Rank; 5]) -> bool {
        self.rank_counts.len() == ranks.len()
            && ranks.iter().all(|rank| self.rank_counts.contains_key(rank))
    }

    fn spans_five(&self) -> bool {
        self.max_ordinal - self.min_ordinal == 4
    }
}

/// Classifies five cards into a [`HandCategory`].
///
/// Rules are tried in a fixed order and the first match wins. Rank-count
/// shapes are checked first, then single-suit hands, then straights. Straight
/// checks use raw ordinals (Ace = 1); the Ace-high straight is matched
/// against the explicit Ten..Ace rank set.
#[must_use]
pub fn evaluate(cards: &[Card; 5]) -> HandCategory {
    let tally = Tally::new(cards);
    let distinct_ranks = tally.distinct_ranks();
    let single_suit = tally.distinct_suits == 1;

    let category = if distinct_ranks == 4 {
        HandCategory::OnePair
    } else if distinct_ranks == 3 && tally.has_count(2) {
        HandCategory::TwoPair
    } else if distinct_ranks == 3 && tally.has_count(3) {
        HandCategory::ThreeOfAKind
    } else if distinct_ranks == 2 && tally.has_count(4) {
        HandCategory::FourOfAKind
    } else if distinct_ranks == 2 && tally.has_count(3) {
        HandCategory::FullHouse
    } else if single_suit && tally.ranks_are(&BROADWAY) {
        HandCategory::RoyalStraightFlush
    } else if single_suit && (tally.spans_five() || tally.ranks_are(&WHEEL)) {
        HandCategory::StraightFlush
    } else if single_suit {
        HandCategory::Flush
    } else if distinct_ranks == 5
        && (tally.spans_five() || tally.ranks_are(&WHEEL) || tally.ranks_are(&BROADWAY))
    {
        HandCategory::Straight
    } else {
        HandCategory::NoPair
    };

    log::trace!("evaluated {cards:?} as {category}");
    category
}
