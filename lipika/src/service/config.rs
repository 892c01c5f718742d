//! Configuration for the transliteration service.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::{default_cache_dir, DEFAULT_CACHE_CAPACITY};
use crate::provider::{AI4BHARAT_BASE_URL, INPUT_TOOLS_BASE_URL};

/// Per-call provider timeout.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(3);

/// How long the primary provider is skipped after a failure.
pub const DEFAULT_RECOVERY_COOLDOWN: Duration = Duration::from_secs(5 * 60);

/// Suggestions requested per lookup when the caller has no preference.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Configuration for [`TransliterationService`](super::TransliterationService).
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the primary (AI4Bharat) provider.
    pub primary_url: String,

    /// Base URL of the secondary (Google Input Tools) provider.
    pub secondary_url: String,

    /// Timeout applied to every provider call.
    pub provider_timeout: Duration,

    /// Cooldown before the primary is tried again after a failure.
    pub recovery_cooldown: Duration,

    /// Maximum number of cached keys.
    pub cache_capacity: usize,

    /// Directory holding the durable cache document.
    pub cache_dir: PathBuf,

    /// Suggestion count used by `suggest_default`.
    pub max_suggestions: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            primary_url: AI4BHARAT_BASE_URL.to_string(),
            secondary_url: INPUT_TOOLS_BASE_URL.to_string(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            recovery_cooldown: DEFAULT_RECOVERY_COOLDOWN,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_dir: default_cache_dir(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl ServiceConfig {
    /// Set the provider base URLs.
    pub fn with_urls(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_url = primary.into();
        self.secondary_url = secondary.into();
        self
    }

    /// Set the per-call provider timeout.
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Set the primary recovery cooldown.
    pub fn with_recovery_cooldown(mut self, cooldown: Duration) -> Self {
        self.recovery_cooldown = cooldown;
        self
    }

    /// Set the cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the cache directory.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Set the default suggestion count.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }
}
