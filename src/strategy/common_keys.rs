//! Dictionary of likely keys, tried before any statistics

use super::{AnalysisContext, Strategy, StrategyKind, StrategyOutcome};
use crate::progress::AnalysisEvent;
use crate::scoring::ValidationResult;
use crate::text::normalize;

/// Tries every key in [`LanguageModel::common_keys`], in order
///
/// Done when the best key scores above `thresholds.common_key_accept`.
///
/// [`LanguageModel::common_keys`]: crate::language::LanguageModel::common_keys
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonKeyProber;

impl CommonKeyProber {
    pub fn new() -> Self {
        Self
    }

    /// Best-scoring common key, or `None` if the list is empty or cancelled early
    pub fn probe(&self, ctx: &AnalysisContext<'_>) -> Option<ValidationResult> {
        let mut best: Option<ValidationResult> = None;

        for key in &ctx.model.common_keys {
            if ctx.cancel.is_cancelled() {
                break;
            }

            let key = normalize(key);
            if key.is_empty() {
                continue;
            }

            let result = ctx.scorer.validate(ctx.ciphertext, &key);
            ctx.progress.emit(|| AnalysisEvent::KeyScored {
                strategy: StrategyKind::CommonKeys,
                key: key.to_string(),
                score: result.composite_score,
            });

            if best.as_ref().map_or(true, |b| result.beats(b)) {
                best = Some(result);
            }
        }

        best
    }
}

impl Strategy for CommonKeyProber {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CommonKeys
    }

    fn execute(&self, ctx: &AnalysisContext<'_>) -> StrategyOutcome {
        let best = self.probe(ctx);
        StrategyOutcome::gated(best, ctx.config.thresholds.common_key_accept)
    }
}
