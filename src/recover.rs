//! Key assembly from per-position Caesar shifts

use crate::frequency::best_shift_at;
use crate::key_length::subsequences;
use crate::language::LanguageModel;
use crate::progress::ProgressReporter;
use crate::text::NormalizedText;

/// Recover a key of exactly `length` letters
///
/// Each subsequence contributes the letter of its best chi-squared shift;
/// empty subsequences (very short ciphertexts) contribute `A`.
pub fn recover_key(
    text: &NormalizedText,
    length: usize,
    model: &LanguageModel,
    progress: ProgressReporter<'_>,
) -> NormalizedText {
    let shifts: Vec<u8> = subsequences(text, length)
        .iter()
        .enumerate()
        .map(|(position, sub)| {
            if sub.is_empty() {
                0
            } else {
                best_shift_at(sub, model, position, progress).shift
            }
        })
        .collect();

    NormalizedText::from_shifts(&shifts)
}

/// Shortest key that repeats to `key` (`SECURITYSECURITY` → `SECURITY`)
///
/// Both keys decrypt identically, so the shorter one is reported.
pub fn reduce_to_period(key: &NormalizedText) -> NormalizedText {
    let bytes = key.as_bytes();
    let n = bytes.len();

    for period in 1..n {
        if n % period == 0 && bytes.chunks(period).all(|c| c == &bytes[..period]) {
            return NormalizedText::from(&key.as_str()[..period]);
        }
    }
    key.clone()
}
