//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same shuffled deck
//! - **Entropy-backed**: Unseeded decks draw their seed from the OS
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use solitaire_cipher::core::DeckRng;
//!
//! let mut rng1 = DeckRng::new(42);
//! let mut rng2 = DeckRng::new(42);
//!
//! let mut a: Vec<u8> = (1..=28).collect();
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Deterministic RNG used to build shuffled decks.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept, so `state()` can still reproduce the stream.
    pub fn from_entropy() -> Result<Self> {
        let mut bytes = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CipherError::Entropy(e.to_string()))?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many shuffles have been performed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut DeckRng) -> Vec<u8> {
        let mut data: Vec<u8> = (1..=28).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(42);
        let mut rng2 = DeckRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DeckRng::new(1);
        let mut rng2 = DeckRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = DeckRng::new(42);
        let mut data = shuffled(&mut rng);

        // Same elements, different order (very likely)
        assert_ne!(data, (1..=28).collect::<Vec<u8>>());

        data.sort();
        assert_eq!(data, (1..=28).collect::<Vec<u8>>());
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = DeckRng::from_entropy().unwrap();
        let mut replay = DeckRng::new(rng.seed());
        let mut original = rng;

        assert_eq!(shuffled(&mut original), shuffled(&mut replay));
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DeckRng::new(42);

        // Advance the RNG
        for _ in 0..5 {
            shuffled(&mut rng);
        }

        let state = rng.state();
        let expected = shuffled(&mut rng);

        let mut restored = DeckRng::from_state(&state);
        assert_eq!(expected, shuffled(&mut restored));
    }

    #[test]
    fn test_state_serde() {
        let state = DeckRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DeckRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
