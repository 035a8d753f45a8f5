//! Text normalization: keep letters A-Z, uppercase everything
//!
//! Every statistical component works on [`NormalizedText`], which is derived
//! once from the raw input and never mutated afterwards.

use serde::Serialize;
use std::fmt;

/// Number of letters in the alphabet the engine works with
pub const ALPHABET_LEN: usize = 26;

/// Immutable sequence of uppercase ASCII letters
///
/// Invariant: every byte is in `b'A'..=b'Z'`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Build a text from shift values (`0` → `A`, `25` → `Z`)
    ///
    /// Values are reduced modulo 26.
    pub fn from_shifts(shifts: &[u8]) -> Self {
        Self(
            shifts
                .iter()
                .map(|&s| char::from(b'A' + s % ALPHABET_LEN as u8))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Letter indices in `0..26`, in text order
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'A')
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        normalize(raw)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip everything that is not an ASCII letter and uppercase the rest
///
/// Never fails; empty input yields empty output.
///
/// # Example
/// ```
/// use vigenere_breaker::text::normalize;
///
/// assert_eq!(normalize("Attack at dawn!").as_str(), "ATTACKATDAWN");
/// assert!(normalize("1234 ...").is_empty());
/// ```
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText(
        raw.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect(),
    )
}
