//! Text encryption and decryption.
//!
//! - `alphabet`: letter to index mapping and modular shifts
//! - `CipherEngine`: one keystream value per letter

pub mod alphabet;
mod engine;

pub use engine::CipherEngine;
