//! Key length estimation by Index of Coincidence
//!
//! Splitting the ciphertext into `L` interleaved subsequences turns each one
//! into a Caesar cipher when `L` is the key length (or a multiple of it), so
//! its IC climbs back to English levels. Every candidate length is scored by
//! how close the mean subsequence IC is to English.

use crate::coincidence::{ic_closeness, index_of_coincidence};
use crate::progress::{AnalysisEvent, ProgressReporter};
use crate::text::NormalizedText;
use serde::Serialize;

/// Scored key length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyLengthCandidate {
    pub length: usize,
    /// Mean IC over the non-empty subsequences
    pub average_ic: f64,
    /// `1 / (1 + |average_ic − 0.067|)`
    pub score: f64,
}

/// Letters at positions ≡ offset (mod `length`), for every offset in `0..length`
///
/// Returns an empty list for `length == 0`.
pub fn subsequences(text: &NormalizedText, length: usize) -> Vec<Vec<u8>> {
    if length == 0 {
        return Vec::new();
    }

    let mut subs = vec![Vec::with_capacity(text.len() / length + 1); length];
    for (i, &b) in text.as_bytes().iter().enumerate() {
        subs[i % length].push(b);
    }
    subs
}

/// Mean IC across the non-empty subsequences for one candidate length
pub fn average_ic(text: &NormalizedText, length: usize) -> f64 {
    let ics: Vec<f64> = subsequences(text, length)
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| index_of_coincidence(s))
        .collect();

    if ics.is_empty() {
        0.0
    } else {
        ics.iter().sum::<f64>() / ics.len() as f64
    }
}

/// Score every length in `1..=min(max_key_length, N/2)`, best first
///
/// Equal scores keep the shorter length first.
///
/// # Example
/// ```
/// use vigenere_breaker::key_length::estimate_key_lengths;
/// use vigenere_breaker::progress::ProgressReporter;
/// use vigenere_breaker::text::normalize;
///
/// let text = normalize("LXFOPVEFRNHR");
/// let ranked = estimate_key_lengths(&text, 20, ProgressReporter::silent());
/// assert_eq!(ranked.len(), 6); // N/2 caps the search
/// ```
pub fn estimate_key_lengths(
    text: &NormalizedText,
    max_key_length: usize,
    progress: ProgressReporter<'_>,
) -> Vec<KeyLengthCandidate> {
    let upper = max_key_length.min(text.len() / 2);

    let mut candidates: Vec<KeyLengthCandidate> = (1..=upper)
        .map(|length| {
            let average_ic = average_ic(text, length);
            let candidate = KeyLengthCandidate {
                length,
                average_ic,
                score: ic_closeness(average_ic),
            };
            tracing::debug!(
                length,
                average_ic = candidate.average_ic,
                score = candidate.score,
                "scored key length"
            );
            progress.emit(|| AnalysisEvent::KeyLengthScored {
                length,
                average_ic,
                score: candidate.score,
            });
            candidate
        })
        .collect();

    // Stable sort keeps shorter lengths ahead on ties
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    #[test]
    fn test_subsequences_interleave() {
        let text = normalize("ABCDEFG");
        let subs = subsequences(&text, 3);
        assert_eq!(subs, vec![b"ADG".to_vec(), b"BE".to_vec(), b"CF".to_vec()]);
    }

    #[test]
    fn test_subsequences_zero_length() {
        assert!(subsequences(&normalize("ABC"), 0).is_empty());
    }

    #[test]
    fn test_subsequences_longer_than_text() {
        let subs = subsequences(&normalize("AB"), 4);
        assert_eq!(subs.len(), 4);
        assert!(subs[2].is_empty() && subs[3].is_empty());
    }

    #[test]
    fn test_average_ic_skips_empty() {
        // Offsets 2 and 3 are empty; "A" and "B" each have IC 0
        assert_eq!(average_ic(&normalize("AB"), 4), 0.0);
    }

    #[test]
    fn test_empty_text_has_no_candidates() {
        let ranked = estimate_key_lengths(&normalize(""), 20, ProgressReporter::silent());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_single_letter_has_no_candidates() {
        let ranked = estimate_key_lengths(&normalize("Q"), 20, ProgressReporter::silent());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_max_key_length_caps_search() {
        let text = normalize(&"ABCDEFGHIJ".repeat(10));
        let ranked = estimate_key_lengths(&text, 7, ProgressReporter::silent());
        assert_eq!(ranked.len(), 7);
        assert!(ranked.iter().all(|c| (1..=7).contains(&c.length)));
    }

    #[test]
    fn test_ranked_descending() {
        let text = normalize(&"THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(4));
        let ranked = estimate_key_lengths(&text, 20, ProgressReporter::silent());
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_periodic_text_has_constant_columns() {
        // A period-4 pattern makes every length-4 subsequence constant
        let text = normalize(&"QXZJ".repeat(25));
        let ranked = estimate_key_lengths(&text, 6, ProgressReporter::silent());
        assert!(ranked.iter().any(|c| c.length == 4 && c.average_ic == 1.0));
    }
}
