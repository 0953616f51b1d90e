//! Keystream generator driving the deck transforms.

use log::{debug, warn};

use crate::deck::Deck;
use crate::error::{CipherError, Result};

use super::steps;
use super::{KeystreamConfig, KeystreamStats};

/// Produces keystream values in `1..=26` from an exclusively owned deck.
///
/// Every call advances the deck, so two generators built from the same key
/// produce the same values in the same order.
///
/// ## Usage
///
/// ```
/// use solitaire_cipher::deck::Deck;
/// use solitaire_cipher::keystream::KeyGenerator;
///
/// let deck = Deck::build_from_sequence(1..=28).unwrap();
/// let mut keys = KeyGenerator::new(deck);
///
/// assert_eq!(keys.keystream(4).unwrap(), vec![8, 16, 11, 8]);
/// ```
#[derive(Clone, Debug)]
pub struct KeyGenerator {
    deck: Deck,
    config: KeystreamConfig,
    stats: KeystreamStats,
}

impl KeyGenerator {
    /// Create a generator with the default (unbounded) configuration.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self::with_config(deck, KeystreamConfig::default())
    }

    /// Create a generator with a custom configuration.
    #[must_use]
    pub fn with_config(deck: Deck, config: KeystreamConfig) -> Self {
        Self {
            deck,
            config,
            stats: KeystreamStats::new(),
        }
    }

    /// Current deck arrangement.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Give back the deck in its current arrangement.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    #[must_use]
    pub fn config(&self) -> &KeystreamConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &KeystreamStats {
        &self.stats
    }

    /// Produce the next keystream value.
    ///
    /// Reruns the full four-step cycle for as long as the candidate is a
    /// joker. Fails only on a corrupted deck or when the configured cycle
    /// ceiling is reached.
    pub fn next_key(&mut self) -> Result<u8> {
        let mut cycles: u32 = 0;
        loop {
            let card = steps::cycle(&mut self.deck)?;
            cycles = cycles.saturating_add(1);
            self.stats.cycles += 1;

            if !card.is_joker() {
                self.stats.keys += 1;
                return Ok(card.value());
            }

            debug!("candidate {} rejected, rerunning cycle", card);
            if self.config.exhausted(cycles) {
                warn!("no keystream value accepted after {} cycles", cycles);
                return Err(CipherError::RetryLimit(cycles));
            }
        }
    }

    /// Produce the next `count` keystream values.
    pub fn keystream(&mut self, count: usize) -> Result<Vec<u8>> {
        (0..count).map(|_| self.next_key()).collect()
    }
}

/// Endless stream of keystream values.
impl Iterator for KeyGenerator {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_deck() -> Deck {
        Deck::build_from_sequence(1..=28).unwrap()
    }

    #[test]
    fn test_sorted_deck_keystream() {
        let mut keys = KeyGenerator::new(sorted_deck());
        assert_eq!(
            keys.keystream(10).unwrap(),
            vec![8, 16, 11, 8, 6, 25, 5, 1, 20, 7]
        );
        assert_eq!(keys.stats().keys, 10);
        assert_eq!(keys.stats().cycles, 11);
    }

    #[test]
    fn test_joker_candidate_reruns_cycle() {
        // The first cycle on a sorted deck lands on joker B
        let mut keys = KeyGenerator::new(sorted_deck());
        assert_eq!(keys.next_key().unwrap(), 8);
        assert_eq!(keys.stats().cycles, 2);
        assert_eq!(keys.stats().retries(), 1);

        let expected: Vec<u8> = vec![
            4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
            1, 27, 2, 3, 28,
        ];
        assert_eq!(keys.deck().to_vec(), expected);
    }

    #[test]
    fn test_retry_ceiling() {
        let config = KeystreamConfig::default().with_max_cycles_per_key(1);
        let mut keys = KeyGenerator::with_config(sorted_deck(), config);

        assert_eq!(keys.next_key(), Err(CipherError::RetryLimit(1)));
        assert_eq!(keys.stats().cycles, 1);
        assert_eq!(keys.stats().keys, 0);
    }

    #[test]
    fn test_iterator_matches_next_key() {
        let mut a = KeyGenerator::new(Deck::build_seeded(5));
        let b = KeyGenerator::new(Deck::build_seeded(5));

        let from_iter: Vec<u8> = b.take(20).collect::<Result<_>>().unwrap();
        assert_eq!(from_iter, a.keystream(20).unwrap());
    }

    #[test]
    fn test_keys_in_range_and_deck_valid() {
        let mut keys = KeyGenerator::new(Deck::build_seeded(99));
        for key in keys.keystream(500).unwrap() {
            assert!((1..=26).contains(&key));
        }
        assert!(keys.deck().is_permutation());
    }
}
