//! Card types, label lookups, and rank comparisons.
//!
//! A [`Rank`] carries a single raw ordinal (Ace = 1 .. King = 13). Two
//! separate views of that ordinal exist:
//!
//! - [`raw_ordinal`] is the value used for straight detection, where the Ace
//!   plays low in the wheel (A-2-3-4-5).
//! - [`ranking_value`] / [`compare_for_ranking`] treat the Ace as high
//!   (value 14) and are used whenever two cards are compared directly.
//!
//! Neither `Rank` nor `Card` implements `Ord`, so callers must pick one of
//! the two explicitly.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Club, Self::Diamond, Self::Heart];
}

/// Card rank. The discriminant is the raw ordinal (Ace = 1, King = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All ranks in canonical deck order (Ace first).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Looks up the rank with the given raw ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `ordinal` is outside `1..=13`.
    pub const fn from_ordinal(ordinal: u8) -> Result<Self, CardError> {
        match ordinal {
            1..=13 => Ok(Self::ALL[(ordinal - 1) as usize]),
            _ => Err(CardError::InvalidRank(ordinal)),
        }
    }
}

/// Raw ordinal of a rank (Ace = 1). Used for straight detection only.
#[must_use]
pub const fn raw_ordinal(rank: Rank) -> u8 {
    rank as u8
}

/// Ranking value of a rank, with the Ace counted high (14).
#[must_use]
pub const fn ranking_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 14,
        _ => raw_ordinal(rank),
    }
}

/// Compares two ranks with the Ace ranked above the King.
#[must_use]
pub fn compare_for_ranking(a: Rank, b: Rank) -> Ordering {
    ranking_value(a).cmp(&ranking_value(b))
}

const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Short display label of a rank ("A", "2".."10", "J", "Q", "K").
#[must_use]
pub const fn rank_label(rank: Rank) -> &'static str {
    RANK_LABELS[(raw_ordinal(rank) - 1) as usize]
}

/// Display symbol of a suit.
#[must_use]
pub const fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Spade => '♠',
        Suit::Club => '♣',
        Suit::Diamond => '♦',
        Suit::Heart => '♥',
    }
}

/// A playing card.
///
/// Equality covers both fields. Ordering is by rank only and goes through
/// [`Card::compare_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether both cards share a suit.
    #[must_use]
    pub fn same_suit(&self, other: &Self) -> bool {
        self.suit == other.suit
    }

    /// Returns whether both cards share a rank.
    #[must_use]
    pub fn same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Compares two cards by rank with the Ace high. Suits are ignored.
    #[must_use]
    pub fn compare_rank(&self, other: &Self) -> Ordering {
        compare_for_ranking(self.rank, other.rank)
    }

    /// Returns whether this card ranks strictly above `other`.
    #[must_use]
    pub fn outranks(&self, other: &Self) -> bool {
        self.compare_rank(other) == Ordering::Greater
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(rank_label(*self))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", suit_symbol(*self))
    }
}

impl fmt::Display for Card {
    /// Suit first, then rank: `♠A`, `♥10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

fn parse_suit(c: char) -> Option<Suit> {
    match c.to_ascii_uppercase() {
        'S' | '♠' => Some(Suit::Spade),
        'C' | '♣' => Some(Suit::Club),
        'D' | '♦' => Some(Suit::Diamond),
        'H' | '♥' => Some(Suit::Heart),
        _ => None,
    }
}

fn parse_rank(s: &str) -> Option<Rank> {
    let rank = match s.to_ascii_uppercase().as_str() {
        "A" => Rank::Ace,
        "T" | "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        digit => {
            let ordinal: u8 = digit.parse().ok()?;
            if !(2..=9).contains(&ordinal) {
                return None;
            }
            Rank::from_ordinal(ordinal).ok()?
        }
    };
    Some(rank)
}

/// Parses a rank label followed by a suit letter or symbol: `"AS"`, `"10h"`,
/// `"Q♦"`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(CardError::Parse)?;
        let suit = parse_suit(suit_char).ok_or(CardError::Parse)?;
        let rank = parse_rank(chars.as_str()).ok_or(CardError::Parse)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
