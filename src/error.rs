//! Error types for the cipher.
//!
//! Only deck construction can fail on external input. The remaining variants
//! signal a broken deck invariant, an exhausted retry ceiling, or a failing
//! randomness source.

use thiserror::Error;

use crate::core::Card;

/// Errors produced by deck construction and keystream generation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CipherError {
    /// The key does not hold exactly one card per deck slot.
    #[error("deck key must contain exactly {expected} cards, received {received}")]
    WrongLength { expected: usize, received: usize },

    /// A key value lies outside `1..=28`.
    #[error("card value {value} is outside the range 1..=28")]
    OutOfRange { value: i64 },

    /// A key value appears more than once.
    #[error("card value {0} appears more than once in the deck key")]
    Duplicate(u8),

    /// A token in a textual key is not an integer.
    #[error("could not parse {token:?} as a card value")]
    InvalidToken { token: String },

    /// A joker could not be located; the deck is no longer a permutation.
    #[error("{0} is missing from the deck")]
    MissingJoker(Card),

    /// No keystream value was accepted within the configured cycle ceiling.
    #[error("no keystream value accepted after {0} cycles")]
    RetryLimit(u32),

    /// The operating system randomness source failed.
    #[error("randomness source failed: {0}")]
    Entropy(String),

    /// Binary key encoding or decoding failed.
    #[error("key encoding failed: {0}")]
    Encoding(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CipherError>;
