//! Rendering of analysis reports
//!
//! Text output is meant for people, JSON output (`vigenere-breaker-json-v1`)
//! for scripts.

use crate::orchestrator::AnalysisReport;
use crate::strategy::StrategyKind;
use serde::Serialize;

/// Format identifier carried by every JSON report
pub const JSON_FORMAT: &str = "vigenere-breaker-json-v1";

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// Format version identifier
    pub version: &'static str,
    /// Format name
    pub format: &'static str,
    pub key: &'a str,
    pub plaintext: &'a str,
    /// Composite score of the key, 0.0 to 1.0
    pub confidence: f64,
    /// Absent when the time budget ran out before any strategy finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_by: Option<StrategyKind>,
    pub strategies_run: &'a [StrategyKind],
    pub timed_out: bool,
}

impl<'a> From<&'a AnalysisReport> for JsonReport<'a> {
    fn from(report: &'a AnalysisReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            format: JSON_FORMAT,
            key: &report.key,
            plaintext: &report.plaintext,
            confidence: report.confidence,
            solved_by: report.solved_by,
            strategies_run: &report.strategies_run,
            timed_out: report.timed_out,
        }
    }
}

/// Human-readable report; just the key when `key_only` is set
pub fn render_text(report: &AnalysisReport, key_only: bool) -> String {
    if key_only {
        report.key.clone()
    } else {
        format!("Key: {}\nDecrypted text:\n{}", report.key, report.plaintext)
    }
}

/// Pretty-printed JSON report
pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(report))
}
