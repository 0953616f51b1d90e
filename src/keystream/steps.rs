//! The four deck transforms and key extraction.
//!
//! One keystream cycle applies, in order:
//!
//! 1. [`joker_a`]: joker A moves down one card
//! 2. [`joker_b`]: joker B moves down two cards
//! 3. [`triple_cut`]: cards above the first joker swap with cards below the second
//! 4. [`count_cut`]: the anchor's value counts cards off the front to just above the anchor
//!
//! and then [`candidate`] reads the card the front card's value points at.
//! "Down" wraps from the anchor back to the front.

use log::trace;

use crate::core::Card;
use crate::deck::{Deck, Run, Slot};
use crate::error::{CipherError, Result};

fn locate(deck: &Deck, joker: Card) -> Result<Slot> {
    deck.find(joker).ok_or(CipherError::MissingJoker(joker))
}

/// Swap joker A with the card below it.
pub fn joker_a(deck: &mut Deck) -> Result<()> {
    let slot = locate(deck, Card::JOKER_A)?;
    deck.swap_with_next(slot);
    trace!("after joker A: {}", deck);
    Ok(())
}

/// Move joker B down two cards, one swap at a time.
pub fn joker_b(deck: &mut Deck) -> Result<()> {
    let slot = locate(deck, Card::JOKER_B)?;
    let slot = deck.swap_with_next(slot);
    deck.swap_with_next(slot);
    trace!("after joker B: {}", deck);
    Ok(())
}

/// Exchange the cards above the first joker with the cards below the
/// second, leaving the jokers and everything between them in place.
///
/// With `before`, `middle` and `after` as the three segments, the deck
/// becomes `after + middle + before`. The anchor ends up on the last card
/// of `before`, or on the second joker when `before` is empty.
pub fn triple_cut(deck: &mut Deck) -> Result<()> {
    let a = locate(deck, Card::JOKER_A)?;
    let b = locate(deck, Card::JOKER_B)?;
    let (first, second) = match deck.slots().find(|&s| s == a || s == b) {
        Some(s) if s == a => (a, b),
        _ => (b, a),
    };

    let front = deck.front_slot();
    let rear = deck.rear_slot();

    let before = (first != front).then(|| Run::new(front, deck.prev_slot(first)));
    let middle = Some(Run::new(first, second));
    let after = (second != rear).then(|| Run::new(deck.next_slot(second), rear));

    deck.relink(&[after, middle, before]);
    trace!("after triple cut: {}", deck);
    Ok(())
}

/// Move as many cards as the anchor's value from the front to just above
/// the anchor. The anchor itself never moves.
pub fn count_cut(deck: &mut Deck) {
    let count = deck.anchor().count();
    let front = deck.front_slot();
    let rear = deck.rear_slot();

    // count is at most 27, so the cut never reaches the anchor
    let cut_end = deck.nth_slot(count);
    let rest_first = deck.next_slot(cut_end);

    let moved = Some(Run::new(front, cut_end));
    let rest = (rest_first != rear).then(|| Run::new(rest_first, deck.prev_slot(rear)));
    let anchor = Some(Run::new(rear, rear));

    deck.relink(&[rest, moved, anchor]);
    trace!("after count cut: {}", deck);
}

/// The card found by counting down the front card's value, plus one.
///
/// May be a joker, in which case the caller runs another cycle.
#[must_use]
pub fn candidate(deck: &Deck) -> Card {
    let count = deck.front().count();
    deck.card_at(deck.nth_slot(count + 1))
}

/// Run all four transforms once and return the resulting candidate.
pub fn cycle(deck: &mut Deck) -> Result<Card> {
    joker_a(deck)?;
    joker_b(deck)?;
    triple_cut(deck)?;
    count_cut(deck);
    Ok(candidate(deck))
}
