//! Keystream generation.
//!
//! ## Components
//!
//! - `steps`: the four deck transforms and key extraction, as free functions
//! - `KeyGenerator`: runs cycles until a non-joker candidate appears
//! - `KeystreamConfig`: optional ceiling on cycles per key
//! - `KeystreamStats`: keys, cycles and retries counters
//!
//! ## Example
//!
//! ```
//! use solitaire_cipher::deck::Deck;
//! use solitaire_cipher::keystream::{steps, KeyGenerator};
//!
//! // Steps can be applied one at a time
//! let mut deck = Deck::build_from_sequence(1..=28).unwrap();
//! steps::joker_a(&mut deck).unwrap();
//! assert_eq!(deck.anchor().value(), 27);
//!
//! // Or driven by the generator
//! let mut keys = KeyGenerator::new(deck);
//! let key = keys.next_key().unwrap();
//! assert!((1..=26).contains(&key));
//! ```

mod config;
mod generator;
mod stats;
pub mod steps;

pub use config::KeystreamConfig;
pub use generator::KeyGenerator;
pub use stats::KeystreamStats;
