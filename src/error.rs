//! Error types for cryptanalysis runs
//!
//! Errors come only from the input (nothing to analyze) or from the
//! configuration. A low confidence score is a valid outcome and is never
//! reported as an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the cryptanalysis engine
#[derive(Error, Debug)]
pub enum CryptanalysisError {
    #[error("Ciphertext contains no letters A-Z; nothing to analyze")]
    InvalidInput,

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Failed to read configuration file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for cryptanalysis operations
pub type Result<T> = std::result::Result<T, CryptanalysisError>;
