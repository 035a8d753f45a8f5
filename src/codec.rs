//! Vigenere encryption and decryption
//!
//! Letters are uppercased and shifted by the current key letter. The key
//! position advances only when a letter is consumed; every other character
//! passes through unchanged. All scores downstream depend on this exact
//! coupling, so encrypt and decrypt share one implementation.

use crate::text::{NormalizedText, ALPHABET_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypt `plaintext` with `key`
///
/// # Example
/// ```
/// use vigenere_breaker::codec::encrypt;
/// use vigenere_breaker::text::normalize;
///
/// assert_eq!(encrypt("ATTACKATDAWN", &normalize("LEMON")), "LXFOPVEFRNHR");
/// ```
pub fn encrypt(plaintext: &str, key: &NormalizedText) -> String {
    apply(plaintext, key, Direction::Encrypt)
}

/// Decrypt `ciphertext` with `key`
///
/// An empty key leaves letters unshifted (uppercased only).
pub fn decrypt(ciphertext: &str, key: &NormalizedText) -> String {
    apply(ciphertext, key, Direction::Decrypt)
}

fn apply(input: &str, key: &NormalizedText, direction: Direction) -> String {
    let shifts = key.as_bytes();
    let modulus = ALPHABET_LEN as u8;
    let mut key_index = 0usize;
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        if !c.is_ascii_alphabetic() {
            out.push(c);
            continue;
        }

        let letter = c.to_ascii_uppercase() as u8 - b'A';
        let shifted = if shifts.is_empty() {
            letter
        } else {
            let k = shifts[key_index % shifts.len()] - b'A';
            key_index += 1;
            match direction {
                Direction::Encrypt => (letter + k) % modulus,
                Direction::Decrypt => (letter + modulus - k) % modulus,
            }
        };
        out.push(char::from(b'A' + shifted));
    }

    out
}
