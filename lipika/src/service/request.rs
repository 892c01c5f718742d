//! Validated suggestion requests.

use thiserror::Error;

use crate::cache::{normalize, SuggestionKey};
use crate::provider::LookupRequest;

/// Input rejected before any lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Word is empty")]
    EmptyWord,

    #[error("Language code is empty")]
    EmptyLanguage,
}

/// A normalized `(word, language, max_suggestions)` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    key: SuggestionKey,
    max_suggestions: usize,
}

impl SuggestionRequest {
    /// Validate and normalize a request.
    ///
    /// The word and language are trimmed and lowercased; a suggestion count
    /// of zero is raised to one.
    pub fn new(word: &str, language: &str, max_suggestions: usize) -> Result<Self, RequestError> {
        if normalize(word).is_empty() {
            return Err(RequestError::EmptyWord);
        }
        let key = SuggestionKey::new(language, word).ok_or(RequestError::EmptyLanguage)?;
        Ok(Self {
            key,
            max_suggestions: max_suggestions.max(1),
        })
    }

    pub fn word(&self) -> &str {
        self.key.word()
    }

    pub fn language(&self) -> &str {
        self.key.language()
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn key(&self) -> &SuggestionKey {
        &self.key
    }

    /// The provider-facing form of this request.
    pub fn to_lookup(&self) -> LookupRequest {
        LookupRequest::new(self.word(), self.language(), self.max_suggestions)
    }
}
