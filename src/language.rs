//! Language statistics used by the scorers and the frequency analyzer
//!
//! A [`LanguageModel`] is built once and passed by reference into every
//! component that needs it. Tests can construct alternate models.

use crate::text::{normalize, ALPHABET_LEN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Expected English letter frequencies in percent, `A` through `Z`
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Common English words matched by the word heuristic
const ENGLISH_WORDS: &[&str] = &[
    "THE", "BE", "TO", "OF", "AND", "A", "IN", "THAT", "HAVE", "I", "IT", "FOR", "NOT", "ON",
    "WITH", "HE", "AS", "YOU", "DO", "AT", "THIS", "BUT", "HIS", "BY", "FROM", "THEY", "WE",
    "SAY", "HER", "SHE", "OR", "AN", "WILL", "MY", "ONE", "ALL", "WOULD", "THERE", "THEIR",
    "WHAT", "SO", "UP", "OUT", "IF", "ABOUT", "WHO", "GET", "WHICH", "GO", "ME", "WHEN", "MAKE",
    "CAN", "LIKE", "TIME", "NO", "JUST", "HIM", "KNOW", "TAKE", "PEOPLE", "INTO", "YEAR",
    "YOUR", "GOOD", "SOME", "COULD", "THEM", "SEE", "OTHER", "THAN", "THEN", "NOW", "LOOK",
    "ONLY", "COME", "ITS", "OVER", "THINK", "ALSO", "BACK", "AFTER", "USE", "TWO", "HOW", "OUR",
    "WORK", "FIRST", "WELL", "WAY", "EVEN", "NEW", "WANT", "BECAUSE", "ANY", "THESE", "GIVE",
    "DAY", "MOST", "US", "IS", "WAS", "ARE", "BEEN", "HAS", "HAD", "WERE", "SAID", "DID", "MAN",
    "MORE", "MANY", "MAY", "MUCH", "MUST", "VERY", "WHERE", "HERE", "THROUGH", "BEFORE",
    "SHOULD", "EACH", "UNDER", "OLD", "LONG", "GREAT", "LITTLE", "OWN", "RIGHT", "DOWN", "SUCH",
    "MADE", "WHILE", "STILL", "FIND", "NEVER", "BETWEEN", "AGAIN", "OFF", "LAST", "KEEP",
    "PLACE", "AROUND", "HOUSE", "WORLD", "HELLO", "TEST", "MESSAGE", "SECRET", "ATTACK", "DAWN",
];

/// Keys tried before any statistical work
const COMMON_KEYS: &[&str] = &[
    "SECURITY", "SECRET", "PASSWORD", "CIPHER", "KEY", "CRYPTO", "VIGENERE", "LEMON", "CODE",
    "HIDDEN", "PRIVATE", "ENIGMA", "ALPHA", "OMEGA", "MASTER", "ADMIN", "LETMEIN", "QWERTY",
    "DRAGON", "MONKEY", "SHADOW", "ORANGE", "PUZZLE", "MYSTERY", "KRYPTOS",
];

/// Read-only language statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageModel {
    /// Expected percentage frequency per letter, `A` through `Z`
    pub frequencies: [f64; ALPHABET_LEN],
    /// Uppercase dictionary words
    pub dictionary: HashSet<String>,
    /// Uppercase keys tried by the common-key prober, in order
    pub common_keys: Vec<String>,
}

impl LanguageModel {
    /// English letter frequencies, common-word dictionary and common keys
    pub fn english() -> Self {
        Self {
            frequencies: ENGLISH_FREQUENCIES,
            dictionary: ENGLISH_WORDS.iter().map(|w| w.to_string()).collect(),
            common_keys: COMMON_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Replace the common-key list (keys are normalized, empty ones dropped)
    pub fn with_common_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.common_keys = keys
            .into_iter()
            .map(|k| normalize(k.as_ref()).into_string())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    pub fn is_word(&self, token: &str) -> bool {
        self.dictionary.contains(token)
    }

    /// Expected percentage frequency of the letter with index `letter`
    pub fn frequency(&self, letter: usize) -> f64 {
        self.frequencies[letter]
    }
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::english()
    }
}
