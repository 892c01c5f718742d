//! Provider trait, lookup request, and error types.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors reported by a suggestion provider.
///
/// Every variant means "provider failed": the orchestrator treats them all
/// as a reason to fail over and never surfaces them to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The request did not complete within the provider timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The response body could not be interpreted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The provider reported a non-success status inside the payload.
    #[error("Provider rejected request with status '{0}'")]
    Rejected(String),

    /// Connection-level failure (DNS, TLS, reset, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}

/// A normalized lookup handed to a provider.
///
/// `word` is already trimmed and lowercased by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub word: String,
    pub language: String,
    pub max_suggestions: usize,
}

impl LookupRequest {
    pub fn new(word: impl Into<String>, language: impl Into<String>, max_suggestions: usize) -> Self {
        Self {
            word: word.into(),
            language: language.into(),
            max_suggestions,
        }
    }
}

/// A remote transliteration lookup.
///
/// Implementations must return either the full ordered suggestion list
/// (possibly empty) or an error; partial results are never returned.
///
/// # Dyn Compatibility
///
/// `lookup` returns a [`BoxFuture`] so providers can be held as
/// `Arc<dyn SuggestionProvider>` and iterated as an ordered strategy list.
pub trait SuggestionProvider: Send + Sync {
    /// Look up transliteration candidates for the request, best first.
    fn lookup<'a>(
        &'a self,
        request: &'a LookupRequest,
    ) -> BoxFuture<'a, Result<Vec<String>, ProviderError>>;

    /// Human-readable provider name for logging.
    fn name(&self) -> &str;
}
