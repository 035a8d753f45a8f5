#![no_main]

use libfuzzer_sys::fuzz_target;
use vigenere_breaker::{AnalysisConfig, CryptanalysisError, Cryptanalyst};

fuzz_target!(|data: &[u8]| {
    // Analysis must never panic and confidence must stay in [0, 1]
    if let Ok(input) = std::str::from_utf8(data) {
        let config = AnalysisConfig {
            max_key_length: 8,
            ..AnalysisConfig::default()
        };
        match Cryptanalyst::new(config).analyze(input) {
            Ok(report) => assert!((0.0..=1.0).contains(&report.confidence)),
            Err(CryptanalysisError::InvalidInput) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
});
