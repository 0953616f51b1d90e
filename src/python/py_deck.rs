//! Deck bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::deck::{Deck, DeckKey};
use crate::error::CipherError;

pub(crate) fn to_py_err(err: CipherError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for Deck.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck(pub Deck);

#[pymethods]
impl PyDeck {
    /// Create a deck from 28 distinct card values, front first.
    #[new]
    fn new(values: Vec<i64>) -> PyResult<Self> {
        Deck::build_from_sequence(values).map(Self).map_err(to_py_err)
    }

    /// Parse a whitespace-delimited deck key.
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        let key: DeckKey = text.parse().map_err(to_py_err)?;
        Ok(Self(Deck::from_key(&key)))
    }

    /// Shuffle a deck with OS randomness.
    #[staticmethod]
    fn random() -> PyResult<Self> {
        Deck::build_random().map(Self).map_err(to_py_err)
    }

    /// Shuffle a deck reproducibly from a seed.
    #[staticmethod]
    fn seeded(seed: u64) -> Self {
        Self(Deck::build_seeded(seed))
    }

    /// Card values from front to anchor.
    fn values(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// The deck as a shareable key string.
    fn key(&self) -> String {
        self.0.key().to_string()
    }

    fn __repr__(&self) -> String {
        format!("Deck({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
