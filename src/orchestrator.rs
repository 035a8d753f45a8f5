//! Cryptanalysis orchestration
//!
//! Runs an ordered list of strategies against one ciphertext:
//!
//! ```text
//! [BruteForcer]      (only with use_brute_force; accepted above 0.7)
//!      ↓
//! CommonKeyProber    (accepted above 0.55)
//!      ↓
//! StatisticalAttack  (top-3 key lengths, never accepted early)
//!      ↓
//! best composite score across everything that ran
//! ```
//!
//! The first strategy whose outcome is `done` ends the run and its result
//! is returned as-is. Otherwise every result is reduced to the maximum.

use crate::best::BestSoFar;
use crate::cancel::CancellationToken;
use crate::config::AnalysisConfig;
use crate::error::{CryptanalysisError, Result};
use crate::language::LanguageModel;
use crate::progress::{AnalysisEvent, ProgressReporter, ProgressSink};
use crate::scoring::{HeuristicScorer, ScoringStrategy, ValidationResult};
use crate::strategy::{
    AnalysisContext, BruteForcer, CommonKeyProber, StatisticalAttack, Strategy, StrategyKind,
};
use crate::text::{normalize, NormalizedText};
use serde::Serialize;
use std::fmt;

/// Final answer of an analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub key: String,
    pub plaintext: String,
    /// Composite score of the winning key, in `[0, 1]`
    pub confidence: f64,
    /// Strategy that produced the key; `None` only when the time budget ran
    /// out before any strategy produced a candidate
    pub solved_by: Option<StrategyKind>,
    /// Strategies that ran, in order
    pub strategies_run: Vec<StrategyKind>,
    pub timed_out: bool,
    pub ic_score: f64,
    pub word_match_score: f64,
}

impl AnalysisReport {
    fn from_result(
        result: ValidationResult,
        solved_by: Option<StrategyKind>,
        strategies_run: Vec<StrategyKind>,
        timed_out: bool,
    ) -> Self {
        Self {
            key: result.key.into_string(),
            plaintext: result.decrypted_text,
            confidence: result.composite_score,
            solved_by,
            strategies_run,
            timed_out,
            ic_score: result.ic_score,
            word_match_score: result.word_match_score,
        }
    }
}

/// Ciphertext-only attack on the Vigenere cipher
///
/// # Example
/// ```
/// use vigenere_breaker::codec::encrypt;
/// use vigenere_breaker::orchestrator::Cryptanalyst;
/// use vigenere_breaker::text::normalize;
///
/// let plain = "we will meet at the old house after the first day of the new year";
/// let cipher = encrypt(plain, &normalize("CIPHER"));
///
/// let report = Cryptanalyst::default().analyze(&cipher).unwrap();
/// assert_eq!(report.key, "CIPHER");
/// assert!(report.confidence > 0.55);
/// ```
pub struct Cryptanalyst {
    config: AnalysisConfig,
    model: LanguageModel,
    scorer: Option<Box<dyn ScoringStrategy>>,
}

impl Default for Cryptanalyst {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl fmt::Debug for Cryptanalyst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cryptanalyst")
            .field("config", &self.config)
            .field("custom_scorer", &self.scorer.is_some())
            .finish_non_exhaustive()
    }
}

impl Cryptanalyst {
    /// Analyst with the English language model and the heuristic scorer
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            model: LanguageModel::english(),
            scorer: None,
        }
    }

    pub fn with_model(mut self, model: LanguageModel) -> Self {
        self.model = model;
        self
    }

    /// Replace the default [`HeuristicScorer`]
    pub fn with_scorer(mut self, scorer: Box<dyn ScoringStrategy>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    /// Strategies in the order they run
    pub fn pipeline(&self) -> Vec<Box<dyn Strategy>> {
        let mut strategies: Vec<Box<dyn Strategy>> = Vec::with_capacity(3);
        if self.config.use_brute_force {
            strategies.push(Box::new(BruteForcer::new()));
        }
        strategies.push(Box::new(CommonKeyProber::new()));
        strategies.push(Box::new(StatisticalAttack::new()));
        strategies
    }

    /// Recover key and plaintext from `ciphertext`
    pub fn analyze(&self, ciphertext: &str) -> Result<AnalysisReport> {
        self.analyze_with_progress(ciphertext, None)
    }

    /// Like [`analyze`](Self::analyze), delivering diagnostic events to `sink`
    pub fn analyze_with_progress(
        &self,
        ciphertext: &str,
        sink: Option<ProgressSink<'_>>,
    ) -> Result<AnalysisReport> {
        self.config.validate()?;

        let text = normalize(ciphertext);
        if text.is_empty() {
            return Err(CryptanalysisError::InvalidInput);
        }
        if let Some(length) = self.config.forced_key_length.filter(|&l| l > text.len()) {
            return Err(CryptanalysisError::Configuration(format!(
                "key length {} exceeds the {} letters of ciphertext",
                length,
                text.len()
            )));
        }

        let default_scorer;
        let scorer: &dyn ScoringStrategy = match &self.scorer {
            Some(custom) => custom.as_ref(),
            None => {
                default_scorer = HeuristicScorer::new(&self.model);
                &default_scorer
            }
        };

        let cancel = CancellationToken::with_optional_timeout(self.config.timeout());
        let ctx = AnalysisContext {
            ciphertext,
            text: &text,
            config: &self.config,
            model: &self.model,
            scorer,
            cancel: &cancel,
            progress: ProgressReporter::new(sink),
        };

        tracing::debug!(letters = text.len(), config = ?self.config, "starting analysis");

        let best = BestSoFar::new();
        let mut strategies_run = Vec::new();

        for strategy in self.pipeline() {
            if cancel.is_cancelled() {
                break;
            }

            let kind = strategy.kind();
            ctx.progress
                .emit(|| AnalysisEvent::StrategyStarted { strategy: kind });

            let outcome = strategy.execute(&ctx);
            strategies_run.push(kind);

            tracing::debug!(strategy = %kind, score = ?outcome.score(), done = outcome.done, "strategy finished");
            ctx.progress.emit(|| AnalysisEvent::StrategyFinished {
                strategy: kind,
                score: outcome.score(),
                done: outcome.done,
            });

            match outcome.result {
                Some(result) if outcome.done => {
                    tracing::info!(strategy = %kind, key = %result.key, score = result.composite_score, "accepted early");
                    return Ok(AnalysisReport::from_result(
                        result,
                        Some(kind),
                        strategies_run,
                        cancel.timed_out(),
                    ));
                }
                Some(result) => {
                    best.offer(kind, result);
                }
                None => {}
            }
        }

        let timed_out = cancel.timed_out();
        let report = match best.into_inner() {
            Some((kind, result)) => {
                AnalysisReport::from_result(result, Some(kind), strategies_run, timed_out)
            }
            None => {
                // Budget ran out before any candidate: report the identity key
                let identity = NormalizedText::from_shifts(&[0]);
                let result = scorer.validate(ciphertext, &identity);
                AnalysisReport::from_result(result, None, strategies_run, timed_out)
            }
        };
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encrypt;
    use std::time::Duration;

    const PLAIN: &str = "we will meet at the old house after the first day of the new year \
        and you must come alone because there is no other way to keep the secret";

    #[test]
    fn test_empty_ciphertext_is_invalid_input() {
        let err = Cryptanalyst::default().analyze("1234 !?").unwrap_err();
        assert!(matches!(err, CryptanalysisError::InvalidInput));
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_config_rejected() {
        let mut config = AnalysisConfig::default();
        config.max_key_length = 0;
        let err = Cryptanalyst::new(config).analyze("ABC").unwrap_err();
        assert!(matches!(err, CryptanalysisError::Configuration(_)));
    }

    #[test]
    fn test_forced_length_longer_than_text_rejected() {
        let model = LanguageModel::english().with_common_keys(Vec::<String>::new());
        for length in [11, 1_000_000_000, usize::MAX] {
            let config = AnalysisConfig::default().with_key_length(length);
            let err = Cryptanalyst::new(config)
                .with_model(model.clone())
                .analyze("QZXJVKWPLM")
                .unwrap_err();
            assert!(matches!(err, CryptanalysisError::Configuration(_)), "length {}", length);
        }

        // Exactly one key letter per ciphertext letter is still allowed
        let config = AnalysisConfig::default().with_key_length(10);
        let report = Cryptanalyst::new(config)
            .with_model(model)
            .analyze("QZXJVKWPLM")
            .unwrap();
        assert!(report.key.len() <= 10);
    }

    #[test]
    fn test_pipeline_order() {
        let kinds = |c: &Cryptanalyst| c.pipeline().iter().map(|s| s.kind()).collect::<Vec<_>>();

        assert_eq!(
            kinds(&Cryptanalyst::default()),
            vec![StrategyKind::CommonKeys, StrategyKind::Statistical]
        );
        assert_eq!(
            kinds(&Cryptanalyst::new(AnalysisConfig::default().with_brute_force(2))),
            vec![
                StrategyKind::BruteForce,
                StrategyKind::CommonKeys,
                StrategyKind::Statistical
            ]
        );
    }

    #[test]
    fn test_common_key_short_circuits() {
        let cipher = encrypt(PLAIN, &normalize("SECRET"));
        let report = Cryptanalyst::default().analyze(&cipher).unwrap();

        assert_eq!(report.key, "SECRET");
        assert_eq!(report.solved_by, Some(StrategyKind::CommonKeys));
        assert_eq!(report.strategies_run, vec![StrategyKind::CommonKeys]);
        assert_eq!(report.plaintext, PLAIN.to_uppercase());
    }

    #[test]
    fn test_brute_force_short_circuits() {
        let cipher = encrypt(PLAIN, &normalize("GO"));
        let config = AnalysisConfig::default().with_brute_force(2);
        let report = Cryptanalyst::new(config).analyze(&cipher).unwrap();

        assert_eq!(report.key, "GO");
        assert_eq!(report.solved_by, Some(StrategyKind::BruteForce));
        assert_eq!(report.strategies_run, vec![StrategyKind::BruteForce]);
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_statistical_fallback() {
        let cipher = encrypt(PLAIN, &normalize("ZQ"));
        let mut config = AnalysisConfig::default();
        config.max_key_length = 6;
        let report = Cryptanalyst::new(config).analyze(&cipher).unwrap();

        assert_eq!(report.key, "ZQ");
        assert_eq!(report.solved_by, Some(StrategyKind::Statistical));
        assert_eq!(
            report.strategies_run,
            vec![StrategyKind::CommonKeys, StrategyKind::Statistical]
        );
    }

    /// Scores every key 0.25, so no threshold is ever crossed
    struct Constant;

    impl ScoringStrategy for Constant {
        fn validate(&self, ciphertext: &str, key: &NormalizedText) -> ValidationResult {
            ValidationResult {
                key: key.clone(),
                decrypted_text: ciphertext.to_string(),
                ic_score: 0.0,
                word_match_score: 0.0,
                composite_score: 0.25,
            }
        }
    }

    #[test]
    fn test_custom_scorer_is_used() {
        let report = Cryptanalyst::default()
            .with_scorer(Box::new(Constant))
            .analyze("ABCDEFGH")
            .unwrap();
        assert_eq!(report.confidence, 0.25);
        // Nothing clears a threshold, so both default strategies run
        assert_eq!(report.strategies_run.len(), 2);
    }

    #[test]
    fn test_timeout_still_returns_result() {
        let config = AnalysisConfig {
            timeout_secs: Some(0),
            ..AnalysisConfig::default().with_brute_force(8)
        };
        let report = Cryptanalyst::new(config).analyze("LXFOPVEFRNHR").unwrap();
        assert!(report.timed_out);
        assert!(report.strategies_run.is_empty());
        assert_eq!(report.solved_by, None);
        assert_eq!(report.key, "A");
    }

    #[test]
    fn test_deadline_during_brute_force_keeps_partial_best() {
        // Length 8 cannot be exhausted in a second, so the deadline ends the search
        let config = AnalysisConfig::default()
            .with_brute_force(8)
            .with_timeout(Duration::from_secs(1));
        let report = Cryptanalyst::new(config)
            .with_scorer(Box::new(Constant))
            .analyze("LXFOPVEFRNHR")
            .unwrap();

        assert!(report.timed_out);
        assert_eq!(report.solved_by, Some(StrategyKind::BruteForce));
        assert_eq!(report.strategies_run, vec![StrategyKind::BruteForce]);
        // Every key ties, so the first and shortest one is kept
        assert_eq!(report.key, "A");
        assert_eq!(report.confidence, 0.25);
    }

    #[test]
    fn test_progress_events_bracket_strategies() {
        let events = std::sync::Mutex::new(Vec::new());
        let sink = |e: &AnalysisEvent| events.lock().unwrap().push(e.clone());
        let cipher = encrypt(PLAIN, &normalize("SECRET"));
        Cryptanalyst::default()
            .analyze_with_progress(&cipher, Some(&sink))
            .unwrap();

        let events = events.into_inner().unwrap();
        assert_eq!(
            events.first(),
            Some(&AnalysisEvent::StrategyStarted {
                strategy: StrategyKind::CommonKeys
            })
        );
        assert!(matches!(
            events.last(),
            Some(AnalysisEvent::StrategyFinished { done: true, .. })
        ));
    }
}
