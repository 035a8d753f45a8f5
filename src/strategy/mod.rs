// Key search strategies
//
// Each strategy searches the key space its own way and reports its best
// candidate together with a `done` flag. The orchestrator walks an ordered
// list of strategies, stops at the first `done`, and reduces everything it
// saw to a single best result.
//
// - BruteForcer: exhaustive enumeration, optionally on a rayon pool
// - CommonKeyProber: a fixed list of likely keys
// - StatisticalAttack: IC key-length ranking + chi-squared shift recovery

mod brute_force;
mod common_keys;
mod statistical;

pub use brute_force::{key_from_index, BruteForcer};
pub use common_keys::CommonKeyProber;
pub use statistical::StatisticalAttack;

use crate::cancel::CancellationToken;
use crate::config::AnalysisConfig;
use crate::language::LanguageModel;
use crate::progress::ProgressReporter;
use crate::scoring::{ScoringStrategy, ValidationResult};
use crate::text::NormalizedText;
use serde::Serialize;
use std::fmt;

/// Identifies a strategy in reports and events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    BruteForce,
    CommonKeys,
    Statistical,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::BruteForce => "brute-force",
            StrategyKind::CommonKeys => "common-keys",
            StrategyKind::Statistical => "statistical",
        };
        f.write_str(name)
    }
}

/// Everything a strategy may read during one run
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
    /// Raw ciphertext, non-letters included (scoring tokenizes on them)
    pub ciphertext: &'a str,
    pub text: &'a NormalizedText,
    pub config: &'a AnalysisConfig,
    pub model: &'a LanguageModel,
    pub scorer: &'a dyn ScoringStrategy,
    pub cancel: &'a CancellationToken,
    pub progress: ProgressReporter<'a>,
}

impl fmt::Debug for AnalysisContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisContext")
            .field("letters", &self.text.len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

/// Tagged result of one strategy
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutcome {
    pub result: Option<ValidationResult>,
    /// The result is good enough to end the pipeline
    pub done: bool,
}

impl StrategyOutcome {
    pub fn empty() -> Self {
        Self {
            result: None,
            done: false,
        }
    }

    /// Outcome that is done when the result scores strictly above `threshold`
    pub fn gated(result: Option<ValidationResult>, threshold: f64) -> Self {
        let done = result
            .as_ref()
            .is_some_and(|r| r.composite_score > threshold);
        Self { result, done }
    }

    pub fn score(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.composite_score)
    }
}

/// One way of searching for the key
pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn execute(&self, ctx: &AnalysisContext<'_>) -> StrategyOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    fn result(score: f64) -> ValidationResult {
        ValidationResult {
            key: normalize("KEY"),
            decrypted_text: String::new(),
            ic_score: 0.0,
            word_match_score: 0.0,
            composite_score: score,
        }
    }

    #[test]
    fn test_gated_strictly_above() {
        assert!(StrategyOutcome::gated(Some(result(0.56)), 0.55).done);
        assert!(!StrategyOutcome::gated(Some(result(0.55)), 0.55).done);
        assert!(!StrategyOutcome::gated(None, 0.55).done);
    }

    #[test]
    fn test_empty_outcome() {
        let outcome = StrategyOutcome::empty();
        assert!(outcome.score().is_none());
        assert!(!outcome.done);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(StrategyKind::BruteForce.to_string(), "brute-force");
        assert_eq!(StrategyKind::CommonKeys.to_string(), "common-keys");
        assert_eq!(StrategyKind::Statistical.to_string(), "statistical");
    }
}
