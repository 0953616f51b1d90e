//! Letter arithmetic over the 26-letter alphabet, `A = 1` through `Z = 26`.

use crate::core::ALPHABET_SIZE;

/// One-based index of an ASCII letter, case-insensitive.
#[must_use]
pub fn index_of(c: char) -> Option<u8> {
    c.is_ascii_alphabetic()
        .then(|| c.to_ascii_uppercase() as u8 - b'A' + 1)
}

/// Uppercase letter for a one-based index in `1..=26`.
#[must_use]
pub fn letter(index: u8) -> char {
    debug_assert!((1..=ALPHABET_SIZE).contains(&index));
    (b'A' + index - 1) as char
}

/// Drop everything but ASCII letters and uppercase the rest.
#[must_use]
pub fn normalize(message: &str) -> String {
    message
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Shift a letter index forward by `key`, wrapping past `Z` to `A`.
#[must_use]
pub fn shift_forward(index: u8, key: u8) -> u8 {
    (index + key - 1) % ALPHABET_SIZE + 1
}

/// Shift a letter index back by `key`; a result of zero wraps to `Z`.
#[must_use]
pub fn shift_back(index: u8, key: u8) -> u8 {
    let n = ALPHABET_SIZE as i16;
    match ((index as i16 - key as i16) % n + n) % n {
        0 => ALPHABET_SIZE,
        shifted => shifted as u8,
    }
}
