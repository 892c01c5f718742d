//! Transliteration service.
//!
//! [`TransliterationService`] is the entry point used by the document
//! builder's editor. It owns the suggestion cache and the primary provider
//! health state, and always resolves to a (possibly empty) suggestion list.

mod config;
mod health;
mod request;
mod transliterator;

pub use config::{
    ServiceConfig, DEFAULT_MAX_SUGGESTIONS, DEFAULT_PROVIDER_TIMEOUT, DEFAULT_RECOVERY_COOLDOWN,
};
pub use health::ProviderHealth;
pub use request::{RequestError, SuggestionRequest};
pub use transliterator::TransliterationService;
