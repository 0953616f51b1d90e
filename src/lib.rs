//! # solitaire-cipher
//!
//! A keystream cipher driven by a deck of 28 cards: 26 ordinary cards and
//! two jokers. Both parties start from the same deck arrangement (the key),
//! and every letter of the message consumes one keystream value produced
//! by reshuffling the deck with four deterministic steps.
//!
//! This is a teaching cipher. It makes no real-world security claim.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The same starting deck yields the same keystream,
//!    so decryption replays exactly what encryption did.
//!
//! 2. **In-Place Ring**: The deck is a ring of 28 slots with index links.
//!    Cuts rewire links instead of copying cards.
//!
//! 3. **Steps in Isolation**: Each of the four transforms is a free function
//!    over `&mut Deck`, so its ordering and edge cases can be tested alone.
//!
//! ## Example
//!
//! ```
//! use solitaire_cipher::{CipherEngine, DeckKey};
//!
//! let key: DeckKey = "1 4 7 10 13 16 19 22 25 28 3 6 9 12 15 18 21 24 27 2 5 8 11 14 17 20 23 26"
//!     .parse()
//!     .unwrap();
//!
//! let ciphertext = CipherEngine::from_key(&key).encrypt("Hello, World!").unwrap();
//! let plaintext = CipherEngine::from_key(&key).decrypt(&ciphertext).unwrap();
//! assert_eq!(plaintext, "HELLOWORLD");
//! ```
//!
//! ## Modules
//!
//! - `core`: Card values and deck randomness
//! - `deck`: The card ring and the shared key
//! - `keystream`: The four transforms and the key generator
//! - `cipher`: Letter arithmetic and the cipher engine
//! - `error`: Error type shared by all modules

pub mod core;
pub mod deck;
pub mod keystream;
pub mod cipher;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Card, DeckRng, DeckRngState, ALPHABET_SIZE, DECK_SIZE};

pub use crate::deck::{Deck, DeckKey};

pub use crate::keystream::{KeyGenerator, KeystreamConfig, KeystreamStats};

pub use crate::cipher::CipherEngine;

pub use crate::error::{CipherError, Result};
