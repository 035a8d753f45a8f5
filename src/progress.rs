//! Structured progress events
//!
//! The engine never prints. Callers that want diagnostics pass a callback
//! and decide how to render the events (the CLI writes them to stderr with
//! `--verbose`).

use crate::strategy::StrategyKind;
use serde::Serialize;
use std::fmt;

/// Diagnostic event emitted during an analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalysisEvent {
    StrategyStarted {
        strategy: StrategyKind,
    },
    KeyLengthScored {
        length: usize,
        average_ic: f64,
        score: f64,
    },
    ShiftScored {
        position: usize,
        shift: u8,
        chi_squared: f64,
    },
    KeyScored {
        strategy: StrategyKind,
        key: String,
        score: f64,
    },
    BruteForceProgress {
        length: usize,
        attempts: u64,
        best_score: f64,
    },
    StrategyFinished {
        strategy: StrategyKind,
        score: Option<f64>,
        done: bool,
    },
}

impl fmt::Display for AnalysisEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisEvent::StrategyStarted { strategy } => write!(f, "[{}] started", strategy),
            AnalysisEvent::KeyLengthScored {
                length,
                average_ic,
                score,
            } => write!(
                f,
                "key length {:>2}: avg IC {:.4}, score {:.4}",
                length, average_ic, score
            ),
            AnalysisEvent::ShiftScored {
                position,
                shift,
                chi_squared,
            } => write!(
                f,
                "  position {:>2} shift {:>2} ({}): chi2 {:.2}",
                position,
                shift,
                char::from(b'A' + shift),
                chi_squared
            ),
            AnalysisEvent::KeyScored {
                strategy,
                key,
                score,
            } => write!(f, "[{}] key {} scored {:.4}", strategy, key, score),
            AnalysisEvent::BruteForceProgress {
                length,
                attempts,
                best_score,
            } => write!(
                f,
                "[brute-force] length {}: {} attempts, best {:.4}",
                length, attempts, best_score
            ),
            AnalysisEvent::StrategyFinished {
                strategy,
                score,
                done,
            } => match score {
                Some(score) => write!(
                    f,
                    "[{}] finished with score {:.4}{}",
                    strategy,
                    score,
                    if *done { " (accepted)" } else { "" }
                ),
                None => write!(f, "[{}] finished without a candidate", strategy),
            },
        }
    }
}

/// Callback invoked with every event; must be shareable across workers
pub type ProgressSink<'a> = &'a (dyn Fn(&AnalysisEvent) + Sync);

/// Optional sink with lazy event construction
#[derive(Clone, Copy, Default)]
pub struct ProgressReporter<'a> {
    sink: Option<ProgressSink<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(sink: Option<ProgressSink<'a>>) -> Self {
        Self { sink }
    }

    /// Reporter that drops every event
    pub fn silent() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Build and deliver an event; the closure only runs when a sink is set
    pub fn emit(&self, event: impl FnOnce() -> AnalysisEvent) {
        if let Some(sink) = self.sink {
            sink(&event());
        }
    }
}

impl fmt::Debug for ProgressReporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
