//! Property tests over arbitrary decks and messages.

use proptest::prelude::*;

use solitaire_cipher::cipher::alphabet;
use solitaire_cipher::keystream::steps;
use solitaire_cipher::{CipherEngine, Deck, KeyGenerator};

fn any_deck() -> impl Strategy<Value = Deck> {
    Just((1..=28u8).collect::<Vec<u8>>())
        .prop_shuffle()
        .prop_map(|values| Deck::build_from_sequence(values).expect("Shuffle is a permutation"))
}

proptest! {
    #[test]
    fn cycle_preserves_permutation(mut deck in any_deck()) {
        steps::cycle(&mut deck).unwrap();
        prop_assert!(deck.is_permutation());
    }

    #[test]
    fn each_step_preserves_permutation(mut deck in any_deck()) {
        steps::joker_a(&mut deck).unwrap();
        prop_assert!(deck.is_permutation());
        steps::joker_b(&mut deck).unwrap();
        prop_assert!(deck.is_permutation());
        steps::triple_cut(&mut deck).unwrap();
        prop_assert!(deck.is_permutation());
        steps::count_cut(&mut deck);
        prop_assert!(deck.is_permutation());
    }

    #[test]
    fn keys_stay_in_alphabet(deck in any_deck()) {
        let keys = KeyGenerator::new(deck).keystream(32).unwrap();
        prop_assert!(keys.iter().all(|k| (1..=26).contains(k)));
    }

    #[test]
    fn round_trip(deck in any_deck(), message in "[a-zA-Z]{0,64}") {
        let ciphertext = CipherEngine::new(deck.clone()).encrypt(&message).unwrap();
        let plaintext = CipherEngine::new(deck).decrypt(&ciphertext).unwrap();
        prop_assert_eq!(plaintext, message.to_ascii_uppercase());
    }

    #[test]
    fn encrypt_filters_like_normalize(deck in any_deck(), message in "\\PC{0,64}") {
        let raw = CipherEngine::new(deck.clone()).encrypt(&message).unwrap();
        let clean = CipherEngine::new(deck).encrypt(&alphabet::normalize(&message)).unwrap();
        prop_assert_eq!(raw, clean);
    }
}
