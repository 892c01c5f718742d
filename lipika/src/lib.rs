//! Lipika - Transliteration client for the document builder
//!
//! This library converts Latin-script phonetic input into a native script
//! (Devanagari, Bengali, Tamil, ...) by querying remote suggestion services.
//!
//! The pieces, leaves first:
//!
//! - [`cache`]: bounded, insertion-ordered suggestion cache mirrored to
//!   durable storage
//! - [`provider`]: the primary (AI4Bharat) and secondary (Google Input Tools)
//!   lookup clients behind one [`provider::SuggestionProvider`] trait
//! - [`service`]: the [`service::TransliterationService`] orchestrator with
//!   failover and timed primary recovery
//!
//! # Example
//!
//! ```no_run
//! use lipika::service::{ServiceConfig, TransliterationService};
//!
//! # async fn run() -> Result<(), lipika::provider::ProviderError> {
//! let service = TransliterationService::from_config(&ServiceConfig::default())?;
//! let suggestions = service.suggest("ram", "mr", 5).await;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod logging;
pub mod provider;
pub mod service;

pub use service::{ServiceConfig, TransliterationService};
