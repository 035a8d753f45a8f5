//! Statistical attack: rank key lengths by IC, recover shifts by chi-squared

use super::{AnalysisContext, Strategy, StrategyKind, StrategyOutcome};
use crate::key_length::estimate_key_lengths;
use crate::progress::AnalysisEvent;
use crate::recover::{recover_key, reduce_to_period};
use crate::scoring::ValidationResult;
use rayon::prelude::*;

/// Recovers one key per top-ranked length and keeps the best
///
/// Several lengths are tried because on short ciphertexts the IC-optimal
/// length is not always the true one. This strategy never ends the
/// pipeline on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalAttack;

impl StatisticalAttack {
    pub fn new() -> Self {
        Self
    }

    /// Key lengths to try, best-ranked first
    pub fn candidate_lengths(&self, ctx: &AnalysisContext<'_>) -> Vec<usize> {
        // A key longer than the text would only add empty columns
        if let Some(length) = ctx.config.forced_key_length {
            return vec![length.min(ctx.text.len().max(1))];
        }

        let ranked = estimate_key_lengths(ctx.text, ctx.config.max_key_length, ctx.progress);
        let lengths: Vec<usize> = ranked
            .iter()
            .take(ctx.config.top_candidates)
            .map(|c| c.length)
            .collect();

        // Fewer than two letters leaves nothing to rank
        if lengths.is_empty() {
            vec![1]
        } else {
            lengths
        }
    }

    fn attempt(&self, ctx: &AnalysisContext<'_>, length: usize) -> Option<ValidationResult> {
        if ctx.cancel.is_cancelled() {
            return None;
        }

        let recovered = recover_key(ctx.text, length, ctx.model, ctx.progress);
        let key = reduce_to_period(&recovered);
        let result = ctx.scorer.validate(ctx.ciphertext, &key);

        tracing::debug!(
            length,
            key = %key,
            score = result.composite_score,
            "statistical: recovered key"
        );
        ctx.progress.emit(|| AnalysisEvent::KeyScored {
            strategy: StrategyKind::Statistical,
            key: key.to_string(),
            score: result.composite_score,
        });
        Some(result)
    }

    /// Best key over the candidate lengths
    pub fn search(&self, ctx: &AnalysisContext<'_>) -> Option<ValidationResult> {
        let lengths = self.candidate_lengths(ctx);

        // Attempts are independent; reduce in rank order either way
        let results: Vec<Option<ValidationResult>> = if ctx.config.parallel {
            lengths
                .par_iter()
                .map(|&length| self.attempt(ctx, length))
                .collect()
        } else {
            lengths
                .iter()
                .map(|&length| self.attempt(ctx, length))
                .collect()
        };

        results.into_iter().flatten().fold(None, |best, result| match best {
            Some(b) if !result.beats(&b) => Some(b),
            _ => Some(result),
        })
    }
}

impl Strategy for StatisticalAttack {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Statistical
    }

    fn execute(&self, ctx: &AnalysisContext<'_>) -> StrategyOutcome {
        StrategyOutcome {
            result: self.search(ctx),
            done: false,
        }
    }
}
