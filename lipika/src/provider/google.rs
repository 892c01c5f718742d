//! Google Input Tools transliteration provider.
//!
//! # URL Pattern
//!
//! `{base}?text={word}&itc={tag}&num={n}&cp=0&cs=1&ie=utf-8&oe=utf-8&app=demopage`
//!
//! `tag` is the input tool code from [`languages::input_tool_for`].
//!
//! # Response Shape
//!
//! ```text
//! ["SUCCESS", [["ram", ["राम", "रम", "रॅम"], [], {"candidate_type": [0, 0, 0]}]]]
//! ```
//!
//! Suggestions live at `response[1][0][1]`.

use std::time::Duration;

use serde_json::Value;

use super::encoding::encode_component;
use super::http::{get_with_timeout, AsyncHttpClient};
use super::languages;
use super::types::{BoxFuture, LookupRequest, ProviderError, SuggestionProvider};

/// Public Google Input Tools endpoint.
pub const INPUT_TOOLS_BASE_URL: &str = "https://inputtools.google.com/request";

/// Status string of a successful Input Tools response.
const STATUS_SUCCESS: &str = "SUCCESS";

/// Secondary transliteration provider backed by Google Input Tools.
pub struct GoogleInputToolsProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
    timeout: Duration,
}

impl<C: AsyncHttpClient> GoogleInputToolsProvider<C> {
    /// Creates a provider against the public endpoint.
    pub fn new(http_client: C, timeout: Duration) -> Self {
        Self::with_base_url(http_client, INPUT_TOOLS_BASE_URL, timeout)
    }

    /// Creates a provider against a custom endpoint.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            timeout,
        }
    }

    fn build_url(&self, request: &LookupRequest) -> String {
        format!(
            "{}?text={}&itc={}&num={}&cp=0&cs=1&ie=utf-8&oe=utf-8&app=demopage",
            self.base_url,
            encode_component(&request.word),
            languages::input_tool_for(&request.language),
            request.max_suggestions
        )
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<Vec<String>, ProviderError> {
        let url = self.build_url(request);
        let body = get_with_timeout(&self.http_client, &url, self.timeout).await?;
        parse_response(&body)
    }
}

impl<C: AsyncHttpClient> SuggestionProvider for GoogleInputToolsProvider<C> {
    fn lookup<'a>(
        &'a self,
        request: &'a LookupRequest,
    ) -> BoxFuture<'a, Result<Vec<String>, ProviderError>> {
        Box::pin(self.fetch(request))
    }

    fn name(&self) -> &str {
        "Google Input Tools"
    }
}

/// Extract suggestions from an Input Tools response body.
///
/// A body that is not a JSON array, or whose status is not `SUCCESS`, is a
/// failure. A `SUCCESS` response without a candidate list is empty.
fn parse_response(body: &[u8]) -> Result<Vec<String>, ProviderError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    let Value::Array(parts) = value else {
        return Err(ProviderError::MalformedResponse(
            "expected a JSON array".to_string(),
        ));
    };

    match parts.first().and_then(Value::as_str) {
        Some(STATUS_SUCCESS) => {}
        Some(status) => return Err(ProviderError::Rejected(status.to_string())),
        None => {
            return Err(ProviderError::MalformedResponse(
                "missing status".to_string(),
            ))
        }
    }

    let candidates = parts
        .get(1)
        .and_then(|segments| segments.get(0))
        .and_then(|segment| segment.get(1))
        .and_then(Value::as_array);

    Ok(candidates
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}
