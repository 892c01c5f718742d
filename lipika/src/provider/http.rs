//! HTTP client abstraction for testability

use std::future::Future;
use std::time::Duration;

use super::types::ProviderError;

/// User agent sent with every provider request.
const USER_AGENT: &str = concat!("lipika/", env!("CARGO_PKG_VERSION"));

/// Trait for async HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Returns
    ///
    /// The response body as bytes, or an error for network failures and
    /// non-success status codes.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// Real async HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new client without a transport-level timeout.
    ///
    /// Providers enforce their own per-call timeout.
    pub fn new() -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ProviderError::Network(format!("Failed to read response: {}", e)))
    }
}

/// Issue a GET and abandon it once `timeout` elapses.
///
/// Dropping the in-flight future cancels the request.
pub(crate) async fn get_with_timeout<C: AsyncHttpClient>(
    client: &C,
    url: &str,
    timeout: Duration,
) -> Result<Vec<u8>, ProviderError> {
    match tokio::time::timeout(timeout, client.get(url)).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(timeout)),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Mock async HTTP client for testing.
    ///
    /// Returns a fixed response and records every requested URL.
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, ProviderError>,
        pub requests: Mutex<Vec<String>>,
    }

    impl MockAsyncHttpClient {
        pub fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.as_bytes().to_vec()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn err(error: ProviderError) -> Self {
            Self {
                response: Err(error),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn last_url(&self) -> Option<String> {
            self.requests.lock().last().cloned()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.requests.lock().push(url.to_string());
            self.response.clone()
        }
    }

    /// Mock client that never answers within any reasonable timeout.
    pub struct StalledHttpClient;

    impl AsyncHttpClient for StalledHttpClient {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, ProviderError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_mock_client_success() {
        let mock = MockAsyncHttpClient::ok("[]");

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), b"[]".to_vec());
        assert_eq!(mock.last_url().as_deref(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockAsyncHttpClient::err(ProviderError::Network("Test error".to_string()));

        let result = mock.get("http://example.com").await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_with_timeout_expires() {
        let result =
            get_with_timeout(&StalledHttpClient, "http://example.com", Duration::from_secs(3))
                .await;
        assert_eq!(result, Err(ProviderError::Timeout(Duration::from_secs(3))));
    }

    #[tokio::test]
    async fn test_get_with_timeout_passes_through() {
        let mock = MockAsyncHttpClient::ok("{}");
        let result = get_with_timeout(&mock, "http://example.com", Duration::from_secs(3)).await;
        assert_eq!(result.unwrap(), b"{}".to_vec());
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(AsyncReqwestClient::new().is_ok());
    }
}
