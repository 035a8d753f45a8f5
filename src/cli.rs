//! CLI argument parsing for vigenere-breaker

use crate::config::AnalysisConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vigenere-breaker")]
#[command(version)]
#[command(about = "Ciphertext-only cryptanalysis of the Vigenere cipher", long_about = None)]
pub struct Cli {
    /// Read ciphertext from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print only the recovered key
    #[arg(long = "key-only")]
    pub key_only: bool,

    /// Print analysis progress to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Longest key length considered by the statistical attack
    #[arg(long = "max-key-length", value_name = "N")]
    pub max_key_length: Option<usize>,

    /// Try every key up to --brute-force-max-length before anything else
    #[arg(long = "brute-force")]
    pub brute_force: bool,

    /// Longest key tried by brute force
    #[arg(long = "brute-force-max-length", value_name = "N")]
    pub brute_force_max_length: Option<usize>,

    /// Assume this key length instead of estimating it
    #[arg(long = "key-length", value_name = "N")]
    pub key_length: Option<usize>,

    /// Run brute force and key-length attempts on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Stop searching after this many seconds and report the best key so far
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Load analysis settings from a TOML file (flags take precedence)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,

    /// Encrypt the input with KEY instead of analyzing it
    #[arg(long, value_name = "KEY", conflicts_with = "decrypt")]
    pub encrypt: Option<String>,

    /// Decrypt the input with KEY instead of analyzing it
    #[arg(long, value_name = "KEY")]
    pub decrypt: Option<String>,
}

impl Cli {
    /// Overlay explicit flags on `config`
    pub fn apply_overrides(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(max) = self.max_key_length {
            config.max_key_length = max;
        }
        if self.brute_force {
            config.use_brute_force = true;
        }
        if let Some(max) = self.brute_force_max_length {
            config.brute_force_max_length = max;
        }
        if let Some(length) = self.key_length {
            config = config.with_key_length(length);
        }
        if self.parallel {
            config = config.with_parallel(true);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vigenere-breaker"]);
        assert!(cli.file.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.key_only);
        assert!(!cli.brute_force);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_file_and_output() {
        let cli = Cli::parse_from(["vigenere-breaker", "-f", "in.txt", "-o", "out.txt"]);
        assert_eq!(cli.file, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_cli_json_format() {
        let cli = Cli::parse_from(["vigenere-breaker", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["vigenere-breaker", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_cli_encrypt_conflicts_with_decrypt() {
        let result =
            Cli::try_parse_from(["vigenere-breaker", "--encrypt", "KEY", "--decrypt", "KEY"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["vigenere-breaker"]);
        let base = AnalysisConfig {
            max_key_length: 12,
            ..AnalysisConfig::default()
        };
        let config = cli.apply_overrides(base);
        assert_eq!(config.max_key_length, 12);
        assert!(!config.use_brute_force);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "vigenere-breaker",
            "--max-key-length",
            "6",
            "--brute-force",
            "--brute-force-max-length",
            "3",
            "--key-length",
            "5",
            "--parallel",
            "--timeout",
            "30",
        ]);
        let config = cli.apply_overrides(AnalysisConfig::default());

        assert_eq!(config.max_key_length, 6);
        assert!(config.use_brute_force);
        assert_eq!(config.brute_force_max_length, 3);
        assert_eq!(config.forced_key_length, Some(5));
        assert!(config.parallel);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }
}
