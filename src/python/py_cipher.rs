//! Cipher engine bindings for Python.

use pyo3::prelude::*;

use crate::cipher::CipherEngine;
use crate::keystream::KeystreamConfig;

use super::py_deck::{to_py_err, PyDeck};

/// Python wrapper for CipherEngine.
///
/// The engine copies the deck it is given; the Python `Deck` object is
/// left untouched and can seed the decrypting side.
#[pyclass(name = "CipherEngine")]
pub struct PyCipherEngine(CipherEngine);

#[pymethods]
impl PyCipherEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - deck: Starting deck (copied)
    /// - max_cycles_per_key: Cycle ceiling per key (0 = unlimited)
    #[new]
    #[pyo3(signature = (deck, max_cycles_per_key = 0))]
    fn new(deck: PyRef<'_, PyDeck>, max_cycles_per_key: u32) -> Self {
        let config = KeystreamConfig::default().with_max_cycles_per_key(max_cycles_per_key);
        Self(CipherEngine::with_config(deck.0.clone(), config))
    }

    /// Encrypt a message, dropping non-letters.
    fn encrypt(&mut self, message: &str) -> PyResult<String> {
        self.0.encrypt(message).map_err(to_py_err)
    }

    /// Decrypt a message.
    fn decrypt(&mut self, message: &str) -> PyResult<String> {
        self.0.decrypt(message).map_err(to_py_err)
    }

    /// Snapshot of the current deck.
    fn deck(&self) -> PyDeck {
        PyDeck(self.0.deck().clone())
    }

    /// Keystream values produced so far.
    #[getter]
    fn keys_used(&self) -> u64 {
        self.0.stats().keys
    }

    /// Cycles rerun because the candidate was a joker.
    #[getter]
    fn retries(&self) -> u64 {
        self.0.stats().retries()
    }

    fn __repr__(&self) -> String {
        format!("CipherEngine(keys_used={})", self.0.stats().keys)
    }
}
