//! Caesar shift recovery by chi-squared frequency fit

use crate::coincidence::letter_counts;
use crate::language::LanguageModel;
use crate::progress::{AnalysisEvent, ProgressReporter};
use crate::text::ALPHABET_LEN;
use serde::Serialize;

/// Shift of one subsequence and its goodness of fit (lower is better)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftCandidate {
    pub shift: u8,
    pub chi_squared: f64,
}

impl ShiftCandidate {
    /// Key letter that produces this shift
    pub fn key_letter(&self) -> char {
        char::from(b'A' + self.shift)
    }
}

/// χ² of observed letter counts against the model's expected frequencies
///
/// Letters whose expected count is zero are skipped.
pub fn chi_squared(observed: &[u64; ALPHABET_LEN], model: &LanguageModel) -> f64 {
    let total: u64 = observed.iter().sum();
    let total = total as f64;

    (0..ALPHABET_LEN)
        .filter_map(|letter| {
            let expected = model.frequency(letter) * total / 100.0;
            if expected == 0.0 {
                return None;
            }
            let diff = observed[letter] as f64 - expected;
            Some(diff * diff / expected)
        })
        .sum()
}

/// Best shift for a subsequence, without diagnostics
///
/// # Example
/// ```
/// use vigenere_breaker::codec::encrypt;
/// use vigenere_breaker::frequency::best_shift;
/// use vigenere_breaker::language::LanguageModel;
/// use vigenere_breaker::text::{normalize, NormalizedText};
///
/// let plain = "it was the best of times, it was the worst of times, it was the age \
///     of wisdom, it was the age of foolishness, it was the epoch of belief";
/// let shifted = normalize(&encrypt(plain, &NormalizedText::from_shifts(&[3])));
/// assert_eq!(best_shift(shifted.as_bytes(), &LanguageModel::english()).shift, 3);
/// ```
pub fn best_shift(subsequence: &[u8], model: &LanguageModel) -> ShiftCandidate {
    best_shift_at(subsequence, model, 0, ProgressReporter::silent())
}

/// Best shift for the subsequence at key `position`, reporting every χ²
///
/// Ties go to the lowest shift.
pub fn best_shift_at(
    subsequence: &[u8],
    model: &LanguageModel,
    position: usize,
    progress: ProgressReporter<'_>,
) -> ShiftCandidate {
    let counts = letter_counts(subsequence);
    let mut best = ShiftCandidate {
        shift: 0,
        chi_squared: f64::INFINITY,
    };

    for shift in 0..ALPHABET_LEN {
        // Undoing shift s maps ciphertext letter (l + s) back to l
        let mut observed = [0u64; ALPHABET_LEN];
        for (letter, slot) in observed.iter_mut().enumerate() {
            *slot = counts[(letter + shift) % ALPHABET_LEN];
        }

        let chi = chi_squared(&observed, model);
        tracing::trace!(position, shift, chi_squared = chi, "scored shift");
        progress.emit(|| AnalysisEvent::ShiftScored {
            position,
            shift: shift as u8,
            chi_squared: chi,
        });

        if chi < best.chi_squared {
            best = ShiftCandidate {
                shift: shift as u8,
                chi_squared: chi,
            };
        }
    }

    best
}
