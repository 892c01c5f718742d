//! Transliteration service: cache lookup, provider failover, write-back.

use std::sync::Arc;

use tracing::{debug, warn};

use super::config::ServiceConfig;
use super::health::ProviderHealth;
use super::request::SuggestionRequest;
use crate::cache::{FileStorage, SuggestionCache};
use crate::provider::{
    Ai4BharatProvider, AsyncReqwestClient, GoogleInputToolsProvider, ProviderError,
    SuggestionProvider,
};

/// Which slot a provider occupies in the failover order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProviderRole {
    Primary,
    Secondary,
}

/// Orchestrates suggestion lookups.
///
/// Construct once per process and share via `Arc`; the cache mirror and
/// primary health state live here rather than in globals.
///
/// # Lookup Flow
///
/// 1. Empty input returns an empty list with no I/O
/// 2. A cache hit is returned verbatim
/// 3. Otherwise providers are tried in order (primary, secondary; or only
///    secondary while the primary is down) until one answers
/// 4. A non-empty answer is truncated, cached, and returned
///
/// Provider failures never reach the caller; the worst case is an empty list.
pub struct TransliterationService {
    primary: Arc<dyn SuggestionProvider>,
    secondary: Arc<dyn SuggestionProvider>,
    cache: SuggestionCache,
    health: ProviderHealth,
    max_suggestions: usize,
}

impl TransliterationService {
    /// Create a service from explicit provider strategies and cache.
    ///
    /// Uses the recovery cooldown and default suggestion count from `config`.
    pub fn new(
        primary: Arc<dyn SuggestionProvider>,
        secondary: Arc<dyn SuggestionProvider>,
        cache: SuggestionCache,
        config: &ServiceConfig,
    ) -> Self {
        Self {
            primary,
            secondary,
            cache,
            health: ProviderHealth::new(config.recovery_cooldown),
            max_suggestions: config.max_suggestions,
        }
    }

    /// Create a service talking to the configured remote providers, with
    /// the cache persisted under `config.cache_dir`.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ProviderError> {
        let http_client = AsyncReqwestClient::new()?;
        let primary = Ai4BharatProvider::with_base_url(
            http_client.clone(),
            config.primary_url.as_str(),
            config.provider_timeout,
        );
        let secondary = GoogleInputToolsProvider::with_base_url(
            http_client,
            config.secondary_url.as_str(),
            config.provider_timeout,
        );
        let cache = SuggestionCache::new(
            Arc::new(FileStorage::new(config.cache_dir.clone())),
            config.cache_capacity,
        );

        Ok(Self::new(Arc::new(primary), Arc::new(secondary), cache, config))
    }

    /// Suggest native-script candidates for `word`, best first.
    pub async fn suggest(&self, word: &str, language: &str, max_suggestions: usize) -> Vec<String> {
        match SuggestionRequest::new(word, language, max_suggestions) {
            Ok(request) => self.suggest_request(&request).await,
            Err(e) => {
                debug!(error = %e, "Suggestion request rejected");
                Vec::new()
            }
        }
    }

    /// [`suggest`](Self::suggest) with the configured suggestion count.
    pub async fn suggest_default(&self, word: &str, language: &str) -> Vec<String> {
        self.suggest(word, language, self.max_suggestions).await
    }

    /// Suggest candidates for an already validated request.
    pub async fn suggest_request(&self, request: &SuggestionRequest) -> Vec<String> {
        if let Some(cached) = self.cache.get(request.language(), request.word()) {
            debug!(key = %request.key(), "Suggestion cache hit");
            return cached;
        }
        debug!(key = %request.key(), "Suggestion cache miss");

        let lookup = request.to_lookup();
        for (role, provider) in self.provider_order() {
            match provider.lookup(&lookup).await {
                Ok(mut suggestions) => {
                    debug!(
                        provider = provider.name(),
                        key = %request.key(),
                        count = suggestions.len(),
                        "Provider lookup succeeded"
                    );
                    if suggestions.is_empty() {
                        return suggestions;
                    }
                    suggestions.truncate(request.max_suggestions());
                    self.cache
                        .put(request.language(), request.word(), suggestions.clone());
                    return suggestions;
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        key = %request.key(),
                        error = %e,
                        "Provider lookup failed"
                    );
                    if role == ProviderRole::Primary {
                        self.health.mark_primary_down();
                    }
                }
            }
        }

        warn!(key = %request.key(), "All transliteration providers failed");
        Vec::new()
    }

    /// Whether the primary provider is currently being skipped.
    pub fn is_primary_down(&self) -> bool {
        self.health.is_primary_down()
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    /// Cancel the pending primary recovery timer, if any.
    pub fn shutdown(&self) {
        self.health.shutdown();
    }

    fn provider_order(&self) -> Vec<(ProviderRole, &dyn SuggestionProvider)> {
        let mut order = Vec::with_capacity(2);
        if !self.health.is_primary_down() {
            order.push((ProviderRole::Primary, self.primary.as_ref()));
        }
        order.push((ProviderRole::Secondary, self.secondary.as_ref()));
        order
    }
}
