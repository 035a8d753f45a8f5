//! Best-result reduction shared across strategies and workers

use crate::scoring::ValidationResult;
use crate::strategy::StrategyKind;
use crossbeam::atomic::AtomicCell;
use std::sync::Mutex;

/// Highest-scoring result seen so far
///
/// The full result sits behind a mutex; its score is mirrored in an
/// [`AtomicCell`] so hot loops can discard losing candidates without
/// taking the lock.
#[derive(Debug)]
pub struct BestSoFar {
    best: Mutex<Option<(StrategyKind, ValidationResult)>>,
    score: AtomicCell<f64>,
}

impl Default for BestSoFar {
    fn default() -> Self {
        Self {
            best: Mutex::new(None),
            score: AtomicCell::new(f64::NEG_INFINITY),
        }
    }
}

impl BestSoFar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current best composite score (negative infinity when empty)
    pub fn score(&self) -> f64 {
        self.score.load()
    }

    /// Offer a candidate; returns true when it became the new best
    ///
    /// See [`ValidationResult::beats`] for the ordering.
    pub fn offer(&self, source: StrategyKind, candidate: ValidationResult) -> bool {
        // Lower scores can never win, ties still need the key-length check
        if candidate.composite_score < self.score.load() {
            return false;
        }

        let mut best = self.best.lock().unwrap_or_else(|e| e.into_inner());
        let replace = match best.as_ref() {
            Some((_, incumbent)) => candidate.beats(incumbent),
            None => true,
        };
        if replace {
            self.score.store(candidate.composite_score);
            *best = Some((source, candidate));
        }
        replace
    }

    /// Snapshot of the current best
    pub fn get(&self) -> Option<(StrategyKind, ValidationResult)> {
        self.best.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn into_inner(self) -> Option<(StrategyKind, ValidationResult)> {
        self.best.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}
