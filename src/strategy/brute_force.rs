//! Exhaustive key search, bounded by key length
//!
//! Keys are enumerated length by length (1, 2, ...), lexicographically
//! within each length. The key space is Σ 26^L, so the length cap and the
//! run's cancellation token are the only limits on running time.

use super::{AnalysisContext, Strategy, StrategyKind, StrategyOutcome};
use crate::best::BestSoFar;
use crate::progress::AnalysisEvent;
use crate::scoring::ValidationResult;
use crate::text::{NormalizedText, ALPHABET_LEN};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Key with the given lexicographic rank among keys of `length` letters
///
/// # Example
/// ```
/// use vigenere_breaker::strategy::key_from_index;
///
/// assert_eq!(key_from_index(0, 3).as_str(), "AAA");
/// assert_eq!(key_from_index(27, 2).as_str(), "BB");
/// assert_eq!(key_from_index(26 * 26 - 1, 2).as_str(), "ZZ");
/// ```
pub fn key_from_index(mut index: u64, length: usize) -> NormalizedText {
    let base = ALPHABET_LEN as u64;
    let mut shifts = vec![0u8; length];
    for slot in shifts.iter_mut().rev() {
        *slot = (index % base) as u8;
        index /= base;
    }
    NormalizedText::from_shifts(&shifts)
}

/// Exhaustive search over every key up to `brute_force_max_length`
///
/// Stops everything as soon as a key scores above
/// `thresholds.brute_force_early_stop`; the outcome is done above
/// `thresholds.brute_force_accept`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForcer;

/// Counters shared by every trial of one search
struct SearchState {
    best: BestSoFar,
    attempts: AtomicU64,
    /// Set once a key clears the early-stop threshold
    found: AtomicBool,
}

impl BruteForcer {
    pub fn new() -> Self {
        Self
    }

    /// Best key found, or `None` if cancelled before the first trial
    pub fn search(&self, ctx: &AnalysisContext<'_>) -> Option<ValidationResult> {
        let state = SearchState {
            best: BestSoFar::new(),
            attempts: AtomicU64::new(0),
            found: AtomicBool::new(false),
        };

        for length in 1..=ctx.config.brute_force_max_length {
            let space = (ALPHABET_LEN as u64).pow(length as u32);
            tracing::debug!(length, keys = space, "brute force: enumerating length");

            let finished = if ctx.config.parallel {
                self.search_length_parallel(ctx, &state, length, space)
            } else {
                self.search_length(ctx, &state, length, space)
            };

            if !finished {
                break;
            }
        }

        tracing::debug!(
            attempts = state.attempts.load(Ordering::Relaxed),
            best = state.best.score(),
            "brute force finished"
        );
        state.best.into_inner().map(|(_, result)| result)
    }

    /// Enumerate one length in order; false when the search must stop
    fn search_length(
        &self,
        ctx: &AnalysisContext<'_>,
        state: &SearchState,
        length: usize,
        space: u64,
    ) -> bool {
        for index in 0..space {
            if !self.trial(ctx, state, length, index) {
                return false;
            }
        }
        true
    }

    /// Enumerate one length on the rayon pool; false when the search must stop
    fn search_length_parallel(
        &self,
        ctx: &AnalysisContext<'_>,
        state: &SearchState,
        length: usize,
        space: u64,
    ) -> bool {
        (0..space)
            .into_par_iter()
            .try_for_each(|index| self.trial(ctx, state, length, index).then_some(()))
            .is_some()
    }

    /// Score one key; false when this or another trial ended the search
    fn trial(&self, ctx: &AnalysisContext<'_>, state: &SearchState, length: usize, index: u64) -> bool {
        if state.found.load(Ordering::Relaxed) || ctx.cancel.is_cancelled() {
            return false;
        }

        let key = key_from_index(index, length);
        let result = ctx.scorer.validate(ctx.ciphertext, &key);
        let score = result.composite_score;
        state.best.offer(StrategyKind::BruteForce, result);

        let attempts = state.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        if length >= ctx.config.progress_min_length
            && attempts % ctx.config.progress_interval == 0
        {
            ctx.progress.emit(|| AnalysisEvent::BruteForceProgress {
                length,
                attempts,
                best_score: state.best.score(),
            });
        }

        if score > ctx.config.thresholds.brute_force_early_stop {
            tracing::info!(key = %key, score, "brute force: high-confidence key, stopping");
            state.found.store(true, Ordering::SeqCst);
            return false;
        }
        true
    }
}

impl Strategy for BruteForcer {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BruteForce
    }

    fn execute(&self, ctx: &AnalysisContext<'_>) -> StrategyOutcome {
        let best = self.search(ctx);
        StrategyOutcome::gated(best, ctx.config.thresholds.brute_force_accept)
    }
}
