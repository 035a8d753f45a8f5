//! Index of Coincidence
//!
//! IC = Σ fᵢ(fᵢ−1) / (N(N−1)). English prose sits around 0.065-0.070,
//! uniformly random letters around 0.0385.

use crate::text::ALPHABET_LEN;

/// Reference IC for English text
pub const ENGLISH_IC: f64 = 0.067;

/// Letter counts for a sequence of uppercase letters
pub fn letter_counts(seq: &[u8]) -> [u64; ALPHABET_LEN] {
    let mut counts = [0u64; ALPHABET_LEN];
    for &b in seq {
        if b.is_ascii_uppercase() {
            counts[(b - b'A') as usize] += 1;
        }
    }
    counts
}

/// Index of Coincidence of a sequence of uppercase letters
///
/// Returns 0.0 when the sequence has fewer than two letters.
///
/// # Example
/// ```
/// use vigenere_breaker::coincidence::index_of_coincidence;
///
/// assert_eq!(index_of_coincidence(b"AAAA"), 1.0);
/// assert_eq!(index_of_coincidence(b"A"), 0.0);
/// ```
pub fn index_of_coincidence(seq: &[u8]) -> f64 {
    let n = seq.len();
    if n <= 1 {
        return 0.0;
    }

    let numerator: u64 = letter_counts(seq)
        .iter()
        .map(|&f| f * f.saturating_sub(1))
        .sum();
    numerator as f64 / (n as f64 * (n - 1) as f64)
}

/// Closeness of an IC value to English, in `(0, 1]`
pub fn ic_closeness(ic: f64) -> f64 {
    1.0 / (1.0 + (ic - ENGLISH_IC).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(index_of_coincidence(b""), 0.0);
        assert_eq!(index_of_coincidence(b"Q"), 0.0);
    }

    #[test]
    fn test_all_distinct() {
        assert_eq!(index_of_coincidence(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ"), 0.0);
    }

    #[test]
    fn test_known_value() {
        // AABB: (2*1 + 2*1) / (4*3) = 1/3
        let ic = index_of_coincidence(b"AABB");
        assert!((ic - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_alphabet_repeated() {
        // Each letter appears 10 times: 26*10*9 / (260*259)
        let seq: Vec<u8> = (0..260).map(|i| b'A' + (i % 26) as u8).collect();
        let expected = (26.0 * 90.0) / (260.0 * 259.0);
        assert!((index_of_coincidence(&seq) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ic_closeness() {
        assert_eq!(ic_closeness(ENGLISH_IC), 1.0);
        assert!(ic_closeness(0.0385) < ic_closeness(0.066));
        assert!(ic_closeness(1.0) > 0.0);
    }

    #[test]
    fn test_letter_counts() {
        let counts = letter_counts(b"ABZZ");
        assert_eq!(counts[0], 1);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[25], 2);
    }
}
