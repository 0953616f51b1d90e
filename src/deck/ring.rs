//! The deck as a ring of 28 slots.
//!
//! Each slot holds one card and the index of the slot after it. The anchor
//! (rear) slot closes the ring; the slot after it is the front. Cutting the
//! deck only rewires `next` links, so every step works in place without
//! moving cards between slots.

use log::debug;

use crate::core::{Card, DeckRng, DECK_SIZE};
use crate::error::Result;

use super::DeckKey;

/// Index of a slot in the ring.
pub(crate) type Slot = usize;

/// A non-empty run of consecutive slots, `first` through `last` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Run {
    pub first: Slot,
    pub last: Slot,
}

impl Run {
    pub fn new(first: Slot, last: Slot) -> Self {
        Self { first, last }
    }
}

/// A cyclic deck holding each card value exactly once.
///
/// ## Usage
///
/// ```
/// use solitaire_cipher::deck::Deck;
/// use solitaire_cipher::core::Card;
///
/// let deck = Deck::build_from_sequence(1..=28).unwrap();
/// assert_eq!(deck.front(), Card::new(1).unwrap());
/// assert_eq!(deck.anchor(), Card::JOKER_B);
///
/// // Snapshots are explicit copies
/// let snapshot = deck.clone();
/// assert_eq!(snapshot, deck);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Card held by each slot.
    cards: [Card; DECK_SIZE],

    /// Slot that follows each slot in the ring.
    next: [Slot; DECK_SIZE],

    /// Anchor slot; `next[rear]` is the front of the deck.
    rear: Slot,
}

impl Deck {
    /// Build a deck laid out in key order, front first.
    #[must_use]
    pub fn from_key(key: &DeckKey) -> Self {
        let mut next = [0; DECK_SIZE];
        for (slot, link) in next.iter_mut().enumerate() {
            *link = (slot + 1) % DECK_SIZE;
        }
        Self {
            cards: *key.cards(),
            next,
            rear: DECK_SIZE - 1,
        }
    }

    /// Build a deck from an explicit sequence of card values.
    ///
    /// Fails unless the sequence holds exactly 28 distinct values in `1..=28`.
    pub fn build_from_sequence<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        let key = DeckKey::from_values(values)?;
        Ok(Self::from_key(&key))
    }

    /// Build a uniformly shuffled deck seeded from the operating system.
    pub fn build_random() -> Result<Self> {
        let mut rng = DeckRng::from_entropy()?;
        Ok(Self::shuffled(&mut rng))
    }

    /// Build a shuffled deck that is reproducible from `seed`.
    #[must_use]
    pub fn build_seeded(seed: u64) -> Self {
        Self::shuffled(&mut DeckRng::new(seed))
    }

    /// Build a deck shuffled by the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut DeckRng) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        rng.shuffle(&mut cards);

        let mut arranged = [Card::JOKER_A; DECK_SIZE];
        arranged.copy_from_slice(&cards);
        debug!("built shuffled deck from seed {}", rng.seed());

        Self::from_key(&DeckKey::from_cards_unchecked(arranged))
    }

    /// The card at the front of the deck.
    #[must_use]
    pub fn front(&self) -> Card {
        self.cards[self.front_slot()]
    }

    /// The card at the anchor (rear) of the deck.
    #[must_use]
    pub fn anchor(&self) -> Card {
        self.cards[self.rear]
    }

    /// Iterate cards from front to anchor.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        let mut slot = self.rear;
        (0..DECK_SIZE).map(move |_| {
            slot = self.next[slot];
            self.cards[slot]
        })
    }

    /// Card values from front to anchor.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.cards().map(Card::value).collect()
    }

    /// Zero-based position of `card` counted from the front.
    #[must_use]
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards().position(|c| c == card)
    }

    /// Snapshot the current arrangement as a shareable key.
    #[must_use]
    pub fn key(&self) -> DeckKey {
        let mut cards = [Card::JOKER_A; DECK_SIZE];
        for (slot, card) in cards.iter_mut().zip(self.cards()) {
            *slot = card;
        }
        DeckKey::from_cards_unchecked(cards)
    }

    /// Check that the ring still holds every card value exactly once.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; DECK_SIZE + 1];
        for card in self.cards() {
            let value = card.value() as usize;
            if seen[value] {
                return false;
            }
            seen[value] = true;
        }
        seen[1..].iter().all(|&s| s)
    }

    // === Ring primitives ===

    pub(crate) fn front_slot(&self) -> Slot {
        self.next[self.rear]
    }

    pub(crate) fn rear_slot(&self) -> Slot {
        self.rear
    }

    pub(crate) fn next_slot(&self, slot: Slot) -> Slot {
        self.next[slot]
    }

    /// Slots from front to anchor.
    pub(crate) fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let mut slot = self.rear;
        (0..DECK_SIZE).map(move |_| {
            slot = self.next[slot];
            slot
        })
    }

    pub(crate) fn card_at(&self, slot: Slot) -> Card {
        self.cards[slot]
    }

    /// First slot holding `card`, scanning from the front.
    pub(crate) fn find(&self, card: Card) -> Option<Slot> {
        let mut slot = self.rear;
        for _ in 0..DECK_SIZE {
            slot = self.next[slot];
            if self.cards[slot] == card {
                return Some(slot);
            }
        }
        None
    }

    /// Slot `n` places past the anchor; `nth_slot(1)` is the front.
    pub(crate) fn nth_slot(&self, n: usize) -> Slot {
        (0..n).fold(self.rear, |slot, _| self.next[slot])
    }

    /// Slot whose successor is `slot`.
    pub(crate) fn prev_slot(&self, slot: Slot) -> Slot {
        let mut prev = slot;
        while self.next[prev] != slot {
            prev = self.next[prev];
        }
        prev
    }

    /// Swap the card in `slot` with the card after it. Returns the slot
    /// that now holds the original card.
    pub(crate) fn swap_with_next(&mut self, slot: Slot) -> Slot {
        let next = self.next[slot];
        self.cards.swap(slot, next);
        next
    }

    /// Make `slot` the anchor without changing the cyclic order.
    pub(crate) fn rotate_to(&mut self, slot: Slot) {
        self.rear = slot;
    }

    /// Chain the given runs into a new ring, in order, and anchor the ring
    /// at the end of the last run. `None` entries are empty runs.
    ///
    /// The runs must together cover every slot exactly once.
    pub(crate) fn relink(&mut self, runs: &[Option<Run>]) {
        let mut runs = runs.iter().flatten();
        let Some(&head) = runs.next() else {
            return;
        };

        let mut tail = head;
        for &run in runs {
            self.next[tail.last] = run.first;
            tail = run;
        }
        self.next[tail.last] = head.first;
        self.rotate_to(tail.last);
    }

    /// Overwrite a slot without checking the permutation invariant.
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, slot: Slot, card: Card) {
        self.cards[slot] = card;
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards().eq(other.cards())
    }
}

impl Eq for Deck {}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
