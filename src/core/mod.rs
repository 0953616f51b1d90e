//! Core cipher types: card values and deck randomness.
//!
//! Everything above this module (deck, keystream, cipher) is built from
//! these building blocks.

pub mod card;
pub mod rng;

pub use card::{Card, ALPHABET_SIZE, DECK_SIZE};
pub use rng::{DeckRng, DeckRngState};
