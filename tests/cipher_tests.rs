//! Cipher engine integration tests.
//!
//! Encryption and decryption sessions built from a shared key, the way two
//! parties would use the cipher.

use solitaire_cipher::{CipherEngine, CipherError, Deck, DeckKey};

const KEY_TEXT: &str = "1 4 7 10 13 16 19 22 25 28 3 6 9 12 15 18 21 24 27 2 5 8 11 14 17 20 23 26";

fn shared_key() -> DeckKey {
    KEY_TEXT.parse().expect("Key should parse")
}

#[test]
fn test_hello_world_is_deterministic() {
    let key = shared_key();

    let first = CipherEngine::from_key(&key).encrypt("Hello, World!").unwrap();
    let second = CipherEngine::from_key(&key).encrypt("Hello, World!").unwrap();

    assert_eq!(first, second);
    assert_eq!(first, "SNISYVZCSL");
}

#[test]
fn test_round_trip_between_parties() {
    let key = shared_key();
    let message = "Meet me at the old mill at midnight";

    let ciphertext = CipherEngine::from_key(&key).encrypt(message).unwrap();
    assert!(ciphertext.chars().all(|c| c.is_ascii_uppercase()));

    let plaintext = CipherEngine::from_key(&key).decrypt(&ciphertext).unwrap();
    assert_eq!(plaintext, "MEETMEATTHEOLDMILLATMIDNIGHT");
}

#[test]
fn test_filtering_matches_prestripped_input() {
    let key = shared_key();

    let noisy = CipherEngine::from_key(&key)
        .encrypt("dude, where's my car? (2000)")
        .unwrap();
    let clean = CipherEngine::from_key(&key).encrypt("DUDEWHERESMYCAR").unwrap();

    assert_eq!(noisy, clean);
}

#[test]
fn test_decrypt_with_wrong_key_differs() {
    let ciphertext = CipherEngine::from_key(&shared_key())
        .encrypt("ATTACKATDAWN")
        .unwrap();

    let wrong = CipherEngine::from_key(&DeckKey::sorted())
        .decrypt(&ciphertext)
        .unwrap();
    assert_ne!(wrong, "ATTACKATDAWN");
}

#[test]
fn test_random_deck_round_trip() {
    let deck = Deck::build_random().unwrap();
    let key = deck.key();

    let ciphertext = CipherEngine::new(deck).encrypt("Solitaire").unwrap();
    let plaintext = CipherEngine::from_key(&key).decrypt(&ciphertext).unwrap();

    assert_eq!(plaintext, "SOLITAIRE");
}

#[test]
fn test_key_from_text_file_layout() {
    // One card per line, as a key file would hold it
    let text: String = KEY_TEXT.split(' ').map(|v| format!("{v}\n")).collect();
    let key: DeckKey = text.parse().unwrap();
    assert_eq!(key, shared_key());
}

#[test]
fn test_bad_key_is_rejected_before_use() {
    let err = Deck::build_from_sequence(vec![1u8; 28]).unwrap_err();
    assert_eq!(err, CipherError::Duplicate(1));

    let err = "1 2 3".parse::<DeckKey>().unwrap_err();
    assert!(matches!(err, CipherError::WrongLength { received: 3, .. }));
}
