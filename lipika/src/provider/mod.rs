//! Transliteration provider abstraction
//!
//! This module provides the [`SuggestionProvider`] trait and the two remote
//! implementations used by the transliteration service:
//!
//! - [`Ai4BharatProvider`]: primary, AI4Bharat IndicXlit
//! - [`GoogleInputToolsProvider`]: secondary, Google Input Tools
//!
//! Both are generic over an [`AsyncHttpClient`] so tests can inject mocks.
//!
//! ```ignore
//! use std::time::Duration;
//! use lipika::provider::{Ai4BharatProvider, AsyncReqwestClient, LookupRequest, SuggestionProvider};
//!
//! let provider = Ai4BharatProvider::new(AsyncReqwestClient::new()?, Duration::from_secs(3));
//! let suggestions = provider.lookup(&LookupRequest::new("ram", "mr", 5)).await?;
//! ```

mod ai4bharat;
mod encoding;
mod google;
mod http;
pub mod languages;
mod types;

pub use ai4bharat::{Ai4BharatProvider, AI4BHARAT_BASE_URL};
pub use encoding::{encode_component, encode_path_word};
pub use google::{GoogleInputToolsProvider, INPUT_TOOLS_BASE_URL};
pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use languages::{supported_languages, Language};
pub use types::{BoxFuture, LookupRequest, ProviderError, SuggestionProvider};

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, StalledHttpClient};
