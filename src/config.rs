//! Configuration for a cryptanalysis run
//!
//! Every field has a working default, can come from a
//! TOML file (`--config`) and can be overridden by command-line flags.

use crate::error::{CryptanalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Score thresholds that end the pipeline early
///
/// These are hand-tuned, not derived; they are kept together so they can be
/// adjusted and tested in isolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// A common key scoring above this is accepted without further search
    pub common_key_accept: f64,
    /// A brute-force result scoring above this is accepted
    pub brute_force_accept: f64,
    /// Brute force stops enumerating once a key scores above this
    pub brute_force_early_stop: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            common_key_accept: 0.55,
            brute_force_accept: 0.7,
            brute_force_early_stop: 0.8,
        }
    }
}

/// Analysis configuration
///
/// # Example
/// ```
/// use vigenere_breaker::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.max_key_length, 20);
/// assert!(!config.use_brute_force);
/// assert_eq!(config.brute_force_max_length, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Longest key length considered by the statistical pipeline
    pub max_key_length: usize,

    /// Run exhaustive search before the other strategies
    pub use_brute_force: bool,

    /// Longest key enumerated by brute force
    ///
    /// The default of 8 means up to 26⁸ ≈ 2×10¹¹ trials. It is kept for
    /// parity; set `timeout_secs` when enabling brute force on real input.
    pub brute_force_max_length: usize,

    /// Only try this key length in the statistical pipeline
    pub forced_key_length: Option<usize>,

    /// Number of ranked key lengths the statistical pipeline tries
    pub top_candidates: usize,

    /// Spread brute-force trials and per-length attempts over a worker pool
    pub parallel: bool,

    /// Wall-clock budget for the whole run; unlimited when `None`
    pub timeout_secs: Option<u64>,

    /// Brute force reports progress every this many attempts...
    pub progress_interval: u64,

    /// ...once keys are at least this long
    pub progress_min_length: usize,

    pub thresholds: Thresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_length: 20,
            use_brute_force: false,
            brute_force_max_length: 8,
            forced_key_length: None,
            top_candidates: 3,
            parallel: false,
            timeout_secs: None,
            progress_interval: 10_000,
            progress_min_length: 4,
            thresholds: Thresholds::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a TOML document; missing fields take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|source| CryptanalysisError::ConfigFile {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&source)
    }

    /// Enable brute force up to `max_length`
    pub fn with_brute_force(mut self, max_length: usize) -> Self {
        self.use_brute_force = true;
        self.brute_force_max_length = max_length;
        self
    }

    pub fn with_key_length(mut self, length: usize) -> Self {
        self.forced_key_length = Some(length);
        self
    }

    /// Whole seconds only; a zero budget stops before any strategy runs,
    /// the same as `timeout_secs = 0` in a config file
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Reject configurations the engine cannot run
    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 {
            return Err(CryptanalysisError::Configuration(
                "max_key_length must be > 0".to_string(),
            ));
        }

        if self.brute_force_max_length == 0 {
            return Err(CryptanalysisError::Configuration(
                "brute_force_max_length must be > 0".to_string(),
            ));
        }

        // 26^13 is the largest power of 26 that fits a u64 key index
        if self.brute_force_max_length > 13 {
            return Err(CryptanalysisError::Configuration(format!(
                "brute_force_max_length must be <= 13, got {}",
                self.brute_force_max_length
            )));
        }

        if self.forced_key_length == Some(0) {
            return Err(CryptanalysisError::Configuration(
                "key length must be > 0".to_string(),
            ));
        }

        if self.top_candidates == 0 {
            return Err(CryptanalysisError::Configuration(
                "top_candidates must be > 0".to_string(),
            ));
        }

        if self.progress_interval == 0 {
            return Err(CryptanalysisError::Configuration(
                "progress_interval must be > 0".to_string(),
            ));
        }

        let t = &self.thresholds;
        for (name, value) in [
            ("common_key_accept", t.common_key_accept),
            ("brute_force_accept", t.brute_force_accept),
            ("brute_force_early_stop", t.brute_force_early_stop),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CryptanalysisError::Configuration(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_key_length, 20);
        assert!(!config.use_brute_force);
        assert_eq!(config.brute_force_max_length, 8);
        assert_eq!(config.top_candidates, 3);
        assert_eq!(config.thresholds.common_key_accept, 0.55);
        assert_eq!(config.thresholds.brute_force_accept, 0.7);
        assert_eq!(config.thresholds.brute_force_early_stop, 0.8);
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_max_key_length() {
        let mut config = AnalysisConfig::default();
        config.max_key_length = 0;
        assert!(matches!(
            config.validate(),
            Err(CryptanalysisError::Configuration(_))
        ));
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_brute_force_max_length() {
        let mut config = AnalysisConfig::default();
        config.brute_force_max_length = 0;
        assert!(config.validate().is_err());
        config.brute_force_max_length = 14;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_forced_key_length() {
        let config = AnalysisConfig::default().with_key_length(0);
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_threshold() {
        let mut config = AnalysisConfig::default();
        config.thresholds.common_key_accept = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("common_key_accept"));
    }

    #[test]
    fn test_builders() {
        let config = AnalysisConfig::default()
            .with_brute_force(3)
            .with_key_length(5)
            .with_parallel(true)
            .with_timeout(Duration::from_secs(30));
        assert!(config.use_brute_force);
        assert_eq!(config.brute_force_max_length, 3);
        assert_eq!(config.forced_key_length, Some(5));
        assert!(config.parallel);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_timeout_matches_toml() {
        let built = AnalysisConfig::default().with_timeout(Duration::ZERO);
        let parsed = AnalysisConfig::from_toml_str("timeout_secs = 0").unwrap();
        assert_eq!(built.timeout(), Some(Duration::ZERO));
        assert_eq!(built.timeout(), parsed.timeout());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            max_key_length = 12
            use_brute_force = true

            [thresholds]
            common_key_accept = 0.6
            "#,
        )
        .unwrap();
        assert_eq!(config.max_key_length, 12);
        assert!(config.use_brute_force);
        assert_eq!(config.brute_force_max_length, 8);
        assert_eq!(config.thresholds.common_key_accept, 0.6);
        assert_eq!(config.thresholds.brute_force_accept, 0.7);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let err = AnalysisConfig::from_toml_str("max_key_length = 0").unwrap_err();
        assert!(matches!(err, CryptanalysisError::Configuration(_)));
    }

    #[test]
    fn test_from_toml_malformed() {
        let err = AnalysisConfig::from_toml_str("max_key_length = [").unwrap_err();
        assert!(matches!(err, CryptanalysisError::ConfigParse(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = AnalysisConfig::from_file("/nonexistent/breaker.toml").unwrap_err();
        assert!(matches!(err, CryptanalysisError::ConfigFile { .. }));
    }
}
