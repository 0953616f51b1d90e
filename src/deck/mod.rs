//! Deck structure and the shared key it is built from.
//!
//! - `DeckKey`: validated, serializable arrangement of the 28 cards
//! - `Deck`: the mutable ring the keystream steps operate on

mod key;
mod ring;

pub use key::DeckKey;
pub use ring::Deck;

pub(crate) use ring::{Run, Slot};
