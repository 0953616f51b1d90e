//! Card values.
//!
//! A deck holds the 28 values `1..=28` exactly once:
//! - `1..=26`: ordinary cards, one per letter of the alphabet
//! - `27`: joker A
//! - `28`: joker B
//!
//! ## Usage
//!
//! ```
//! use solitaire_cipher::core::Card;
//!
//! let card = Card::new(12).unwrap();
//! assert!(!card.is_joker());
//! assert_eq!(card.count(), 12);
//!
//! // Joker B counts as joker A wherever a card value is used as a count
//! assert!(Card::JOKER_B.is_joker());
//! assert_eq!(Card::JOKER_B.count(), 27);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 28;

/// Number of ordinary (non-joker) cards, which is also the alphabet size.
pub const ALPHABET_SIZE: u8 = 26;

/// A single card value in `1..=28`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Joker A, the card that moves one position per cycle.
    pub const JOKER_A: Card = Card(27);

    /// Joker B, the card that moves two positions per cycle.
    pub const JOKER_B: Card = Card(28);

    /// Create a card, returning `None` outside `1..=28`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value as usize <= DECK_SIZE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a card from an arbitrary integer, reporting the offending value.
    pub fn try_from_value(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(CipherError::OutOfRange { value })
    }

    /// Get the raw card value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this card is one of the two jokers.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 > ALPHABET_SIZE
    }

    /// Value used when this card drives a count. Joker B counts as 27.
    #[must_use]
    pub const fn count(self) -> usize {
        if self.0 == Self::JOKER_B.0 {
            Self::JOKER_A.0 as usize
        } else {
            self.0 as usize
        }
    }

    /// Iterate every card value in ascending order.
    pub fn all() -> impl Iterator<Item = Card> {
        (1..=DECK_SIZE as u8).map(Card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::JOKER_A => write!(f, "joker A ({})", self.0),
            Self::JOKER_B => write!(f, "joker B ({})", self.0),
            _ => write!(f, "{}", self.0),
        }
    }
}

impl TryFrom<u8> for Card {
    type Error = CipherError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or(CipherError::OutOfRange {
            value: i64::from(value),
        })
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}
