//! Cipher engine combining letters with the keystream.

use log::debug;

use crate::deck::{Deck, DeckKey};
use crate::error::Result;
use crate::keystream::{KeyGenerator, KeystreamConfig, KeystreamStats};

use super::alphabet;

/// Encrypts and decrypts text with one keystream value per letter.
///
/// The engine owns its deck for the whole session. To decrypt, build a
/// second engine from the same key the encrypting side started with.
///
/// ## Usage
///
/// ```
/// use solitaire_cipher::cipher::CipherEngine;
/// use solitaire_cipher::deck::DeckKey;
///
/// let key = DeckKey::sorted();
///
/// let mut sender = CipherEngine::from_key(&key);
/// let ciphertext = sender.encrypt("Hello, World!").unwrap();
/// assert_eq!(ciphertext, "PUWTUVTSFK");
///
/// let mut receiver = CipherEngine::from_key(&key);
/// assert_eq!(receiver.decrypt(&ciphertext).unwrap(), "HELLOWORLD");
/// ```
#[derive(Clone, Debug)]
pub struct CipherEngine {
    keys: KeyGenerator,
}

impl CipherEngine {
    /// Create an engine around a deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            keys: KeyGenerator::new(deck),
        }
    }

    /// Create an engine with a custom keystream configuration.
    #[must_use]
    pub fn with_config(deck: Deck, config: KeystreamConfig) -> Self {
        Self {
            keys: KeyGenerator::with_config(deck, config),
        }
    }

    /// Create an engine from a fresh deck laid out as `key`.
    #[must_use]
    pub fn from_key(key: &DeckKey) -> Self {
        Self::new(Deck::from_key(key))
    }

    /// Encrypt a message.
    ///
    /// Characters other than ASCII letters are dropped and the rest are
    /// uppercased before encryption, so the result holds only `A..=Z`.
    pub fn encrypt(&mut self, message: &str) -> Result<String> {
        let mut out = String::with_capacity(message.len());
        for index in message.chars().filter_map(alphabet::index_of) {
            let key = self.keys.next_key()?;
            out.push(alphabet::letter(alphabet::shift_forward(index, key)));
        }
        debug!("encrypted {} letters", out.len());
        Ok(out)
    }

    /// Decrypt a message produced by [`CipherEngine::encrypt`].
    ///
    /// Letters are read case-insensitively. Any other character is copied
    /// through unchanged and consumes no keystream value.
    pub fn decrypt(&mut self, message: &str) -> Result<String> {
        let mut out = String::with_capacity(message.len());
        for c in message.chars() {
            match alphabet::index_of(c) {
                Some(index) => {
                    let key = self.keys.next_key()?;
                    out.push(alphabet::letter(alphabet::shift_back(index, key)));
                }
                None => out.push(c),
            }
        }
        debug!("decrypted {} characters", out.len());
        Ok(out)
    }

    /// Current deck arrangement.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.keys.deck()
    }

    /// Give back the deck in its current arrangement.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.keys.into_deck()
    }

    #[must_use]
    pub fn stats(&self) -> &KeystreamStats {
        self.keys.stats()
    }
}
