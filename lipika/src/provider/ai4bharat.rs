//! AI4Bharat IndicXlit transliteration provider.
//!
//! # URL Pattern
//!
//! `{base}/tl/{language}/{word}?num_suggestions={n}`
//!
//! The word travels as a path segment, so dots are escaped and the bare
//! `.`/`..` segments are disguised (see [`encode_path_word`]).
//!
//! # Response Shapes
//!
//! ```text
//! {"success": true, "input": "ram", "result": ["राम", "रम"]}
//! {"output": [{"target": ["राम", "रम"]}, ...]}
//! ```
//!
//! `result` wins when it is an array; otherwise every `output[].target` list
//! is flattened in order. Items whose `target` is not an array are skipped,
//! as are non-string entries. Any other JSON value is an empty result.

use std::time::Duration;

use serde_json::Value;

use super::encoding::{encode_component, encode_path_word};
use super::http::{get_with_timeout, AsyncHttpClient};
use super::types::{BoxFuture, LookupRequest, ProviderError, SuggestionProvider};

/// Public AI4Bharat transliteration endpoint.
pub const AI4BHARAT_BASE_URL: &str = "https://xlit-api.ai4bharat.org";

/// Primary transliteration provider backed by the AI4Bharat API.
pub struct Ai4BharatProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
    timeout: Duration,
}

impl<C: AsyncHttpClient> Ai4BharatProvider<C> {
    /// Creates a provider against the public endpoint.
    pub fn new(http_client: C, timeout: Duration) -> Self {
        Self::with_base_url(http_client, AI4BHARAT_BASE_URL, timeout)
    }

    /// Creates a provider against a custom endpoint (self-hosted or test).
    pub fn with_base_url(http_client: C, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn build_url(&self, request: &LookupRequest) -> String {
        format!(
            "{}/tl/{}/{}?num_suggestions={}",
            self.base_url,
            encode_component(&request.language),
            encode_path_word(&request.word),
            request.max_suggestions
        )
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<Vec<String>, ProviderError> {
        let url = self.build_url(request);
        let body = get_with_timeout(&self.http_client, &url, self.timeout).await?;
        parse_response(&body)
    }
}

impl<C: AsyncHttpClient> SuggestionProvider for Ai4BharatProvider<C> {
    fn lookup<'a>(
        &'a self,
        request: &'a LookupRequest,
    ) -> BoxFuture<'a, Result<Vec<String>, ProviderError>> {
        Box::pin(self.fetch(request))
    }

    fn name(&self) -> &str {
        "AI4Bharat"
    }
}

/// Extract suggestions from an AI4Bharat response body.
fn parse_response(body: &[u8]) -> Result<Vec<String>, ProviderError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    if let Some(result) = value.get("result").and_then(Value::as_array) {
        return Ok(strings(result));
    }

    let Some(output) = value.get("output").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(output
        .iter()
        .filter_map(|item| item.get("target").and_then(Value::as_array))
        .flat_map(|target| strings(target))
        .collect())
}

fn strings(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockAsyncHttpClient;

    const TIMEOUT: Duration = Duration::from_secs(3);

    fn provider(body: &str) -> Ai4BharatProvider<MockAsyncHttpClient> {
        Ai4BharatProvider::with_base_url(
            MockAsyncHttpClient::ok(body),
            "https://xlit.test/",
            TIMEOUT,
        )
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(provider("{}").name(), "AI4Bharat");
    }

    #[test]
    fn test_url_construction() {
        let provider = provider("{}");
        let url = provider.build_url(&LookupRequest::new("ram", "mr", 5));
        assert_eq!(url, "https://xlit.test/tl/mr/ram?num_suggestions=5");
    }

    #[test]
    fn test_url_escapes_dots_and_spaces() {
        let provider = provider("{}");
        assert_eq!(
            provider.build_url(&LookupRequest::new("dr. ram", "hi", 3)),
            "https://xlit.test/tl/hi/dr%2E%20ram?num_suggestions=3"
        );
        assert_eq!(
            provider.build_url(&LookupRequest::new("..", "hi", 3)),
            "https://xlit.test/tl/hi/%20%2E%2E?num_suggestions=3"
        );
    }

    #[test]
    fn test_default_base_url() {
        let provider = Ai4BharatProvider::new(MockAsyncHttpClient::ok("{}"), TIMEOUT);
        assert!(provider
            .build_url(&LookupRequest::new("ram", "mr", 5))
            .starts_with("https://xlit-api.ai4bharat.org/tl/mr/"));
    }

    #[tokio::test]
    async fn test_lookup_result_field() {
        let provider = provider(r#"{"success": true, "input": "ram", "result": ["राम", "रम"]}"#);
        let result = provider.lookup(&LookupRequest::new("ram", "mr", 5)).await;
        assert_eq!(result.unwrap(), vec!["राम", "रम"]);
        assert_eq!(
            provider.http_client.last_url().as_deref(),
            Some("https://xlit.test/tl/mr/ram?num_suggestions=5")
        );
    }

    #[tokio::test]
    async fn test_lookup_output_targets_flattened() {
        let provider =
            provider(r#"{"output": [{"target": ["राम", "रम"]}, {"target": ["रामा"]}]}"#);
        let result = provider.lookup(&LookupRequest::new("ram", "mr", 5)).await;
        assert_eq!(result.unwrap(), vec!["राम", "रम", "रामा"]);
    }

    #[test]
    fn test_result_kept_when_output_is_unexpected() {
        let parsed = parse_response(r#"{"result": ["राम"], "output": {"note": "x"}}"#.as_bytes());
        assert_eq!(parsed.unwrap(), vec!["राम"]);
    }

    #[test]
    fn test_bad_output_item_keeps_good_targets() {
        let parsed = parse_response(
            r#"{"output": [{"target": ["राम"]}, {"target": null}, {"other": 1}, {"target": ["रम", 7]}]}"#
                .as_bytes(),
        );
        assert_eq!(parsed.unwrap(), vec!["राम", "रम"]);
    }

    #[test]
    fn test_url_encodes_language() {
        let provider = provider("{}");
        assert_eq!(
            provider.build_url(&LookupRequest::new("ram", "mr/../x?y", 5)),
            "https://xlit.test/tl/mr%2F..%2Fx%3Fy/ram?num_suggestions=5"
        );
    }

    #[tokio::test]
    async fn test_lookup_unexpected_shape_is_empty() {
        for body in [r#"{"success": false}"#, "[1, 2]", r#"{"result": "राम"}"#, "null"] {
            let result = provider(body)
                .lookup(&LookupRequest::new("ram", "mr", 5))
                .await;
            assert_eq!(result.unwrap(), Vec::<String>::new(), "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_lookup_non_json_is_malformed() {
        let result = provider("<html>Bad Gateway</html>")
            .lookup(&LookupRequest::new("ram", "mr", 5))
            .await;
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_lookup_http_error() {
        let provider = Ai4BharatProvider::new(
            MockAsyncHttpClient::err(ProviderError::Http {
                status: 500,
                url: "https://xlit.test".to_string(),
            }),
            TIMEOUT,
        );
        let result = provider.lookup(&LookupRequest::new("ram", "mr", 5)).await;
        assert!(matches!(result, Err(ProviderError::Http { status: 500, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_timeout() {
        let provider = Ai4BharatProvider::new(crate::provider::StalledHttpClient, TIMEOUT);
        let result = provider.lookup(&LookupRequest::new("ram", "mr", 5)).await;
        assert_eq!(result, Err(ProviderError::Timeout(TIMEOUT)));
    }
}
