//! Cache key for transliteration suggestions.
//!
//! # Key Format
//!
//! Keys serialize as `{language}:{word}` for debuggability and as the
//! durable document's object keys. Example: `mr:ram`
//!
//! Both parts are trimmed and lowercased, so `("MR", "  Ram ")` and
//! `("mr", "ram")` name the same entry.

use std::fmt;
use std::str::FromStr;

/// Normalized `(language, word)` pair identifying a cached suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuggestionKey {
    language: String,
    word: String,
}

impl SuggestionKey {
    /// Build a key, normalizing both parts.
    ///
    /// Returns `None` when either part is empty after trimming.
    pub fn new(language: &str, word: &str) -> Option<Self> {
        let language = normalize(language);
        let word = normalize(word);
        if language.is_empty() || word.is_empty() {
            return None;
        }
        Some(Self { language, word })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

impl fmt::Display for SuggestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.language, self.word)
    }
}

/// Error parsing a serialized key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid cache key '{0}'")]
pub struct InvalidKey(pub String);

impl FromStr for SuggestionKey {
    type Err = InvalidKey;

    /// Parse `{language}:{word}`, splitting on the first `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (language, word) = s.split_once(':').ok_or_else(|| InvalidKey(s.to_string()))?;
        Self::new(language, word).ok_or_else(|| InvalidKey(s.to_string()))
    }
}
