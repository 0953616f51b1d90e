//! The shared secret: an ordered arrangement of all 28 cards.
//!
//! Both parties build their deck from the same `DeckKey`. The key is
//! exchanged out of band, usually as whitespace- or line-delimited text:
//!
//! ```
//! use solitaire_cipher::deck::DeckKey;
//!
//! let text = "1 4 7 10 13 16 19 22 25 28 3 6 9 12 15 18 21 24 27 2 5 8 11 14 17 20 23 26";
//! let key: DeckKey = text.parse().unwrap();
//! assert_eq!(key.to_string(), text);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, DECK_SIZE};
use crate::error::{CipherError, Result};

/// A validated permutation of the card values `1..=28`, front to rear.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DeckKey([Card; DECK_SIZE]);

impl DeckKey {
    /// The unshuffled key `1, 2, ..., 28`.
    #[must_use]
    pub fn sorted() -> Self {
        let mut cards = [Card::JOKER_A; DECK_SIZE];
        for (slot, card) in cards.iter_mut().zip(Card::all()) {
            *slot = card;
        }
        Self(cards)
    }

    /// Validate a sequence of integers as a deck key.
    ///
    /// Requires exactly 28 values, each in `1..=28`, with no repeats.
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        let values: Vec<i64> = values.into_iter().map(Into::into).collect();
        if values.len() != DECK_SIZE {
            return Err(CipherError::WrongLength {
                expected: DECK_SIZE,
                received: values.len(),
            });
        }

        let mut cards = [Card::JOKER_A; DECK_SIZE];
        let mut seen = FxHashSet::default();
        for (slot, &value) in cards.iter_mut().zip(&values) {
            let card = Card::try_from_value(value)?;
            if !seen.insert(card) {
                return Err(CipherError::Duplicate(card.value()));
            }
            *slot = card;
        }

        Ok(Self(cards))
    }

    /// Wrap cards already known to form a permutation.
    pub(crate) fn from_cards_unchecked(cards: [Card; DECK_SIZE]) -> Self {
        Self(cards)
    }

    /// Cards in order, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.0
    }

    /// Raw card values in order, front first.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|card| card.value())
    }

    /// Compact binary encoding of the key.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| CipherError::Encoding(e.to_string()))
    }

    /// Decode a key produced by [`DeckKey::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let values: Vec<u8> =
            bincode::deserialize(bytes).map_err(|e| CipherError::Encoding(e.to_string()))?;
        Self::try_from(values)
    }
}

impl TryFrom<Vec<u8>> for DeckKey {
    type Error = CipherError;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        Self::from_values(values)
    }
}

impl From<DeckKey> for Vec<u8> {
    fn from(key: DeckKey) -> Vec<u8> {
        key.values().collect()
    }
}

impl std::str::FromStr for DeckKey {
    type Err = CipherError;

    fn from_str(text: &str) -> Result<Self> {
        let values = text
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| CipherError::InvalidToken {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<i64>>>()?;
        Self::from_values(values)
    }
}

impl std::fmt::Display for DeckKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
