//! Vigenere breaker - ciphertext-only cryptanalysis of the Vigenere cipher
//!
//! This library recovers the key and plaintext of a Vigenere-encrypted
//! English message without any known plaintext. It ranks key lengths by
//! index of coincidence, recovers each key letter with chi-squared
//! frequency analysis, probes a list of common keys and can optionally
//! brute-force short keys, scoring every candidate with a pluggable
//! [`ScoringStrategy`](scoring::ScoringStrategy).
//!
//! ```
//! use vigenere_breaker::{codec, text::normalize, AnalysisConfig, Cryptanalyst};
//!
//! let cipher = codec::encrypt("attack at dawn", &normalize("LEMON"));
//! assert_eq!(cipher, "LXFOPV EF RNHR");
//!
//! let report = Cryptanalyst::new(AnalysisConfig::default()).analyze(&cipher).unwrap();
//! assert_eq!(report.key, "LEMON");
//! ```

pub mod best;
pub mod cancel;
pub mod cli;
pub mod codec;
pub mod coincidence;
pub mod config;
pub mod error;
pub mod frequency;
pub mod key_length;
pub mod language;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod recover;
pub mod scoring;
pub mod strategy;
pub mod text;

pub use config::{AnalysisConfig, Thresholds};
pub use error::{CryptanalysisError, Result};
pub use orchestrator::{AnalysisReport, Cryptanalyst};
