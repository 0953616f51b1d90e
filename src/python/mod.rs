//! Python bindings for the solitaire cipher.
//!
//! # Quick Start
//!
//! ```python
//! import solitaire_cipher as sc
//!
//! deck = sc.Deck.parse(open("deck.txt").read())
//!
//! ciphertext = sc.CipherEngine(deck).encrypt("Hello, World!")
//! plaintext = sc.CipherEngine(deck).decrypt(ciphertext)
//! ```

use pyo3::prelude::*;

mod py_cipher;
mod py_deck;

pub use py_cipher::*;
pub use py_deck::*;

/// solitaire_cipher: a deck-driven keystream cipher.
#[pymodule]
fn solitaire_cipher(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDeck>()?;
    m.add_class::<PyCipherEngine>()?;
    Ok(())
}
