//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors for testing purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, HttpMethod, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST/PATCH requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are looked up by `METHOD url` first, then by exact URL, then
/// by URL prefix, and finally the default response.
///
/// # Example
///
/// ```ignore
/// use yurban_driver::adapters::mock::{MockHttpClient, MockResponse};
/// use yurban_driver::traits::{HttpClient, HttpMethod, Headers};
///
/// let client = MockHttpClient::new();
/// client.set_response_for(
///     HttpMethod::Get,
///     "http://api/profile",
///     MockResponse::json(200, serde_json::json!({"user": {}})),
/// );
///
/// let response = client.get("http://api/profile", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Artificial latency applied before answering
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: Arc::new(Mutex::new(None)),
        }
    }

    /// Set a response for a URL regardless of method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a response for one method and URL.
    pub fn set_response_for(&self, method: HttpMethod, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(Self::method_key(method, url), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Delay every response, keeping requests in flight for a while.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests matching a method and URL suffix.
    pub fn requests_to(&self, method: HttpMethod, url_suffix: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.method == method && r.url.ends_with(url_suffix))
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Clear all configured responses.
    pub fn clear_responses(&self) {
        self.responses.lock().unwrap().clear();
    }

    fn method_key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method, url)
    }

    /// Record a request.
    fn record_request(&self, method: HttpMethod, url: &str, headers: &Headers, body: Option<&str>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });
    }

    /// Get the response for a request.
    fn get_response(&self, method: HttpMethod, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(&Self::method_key(method, url)) {
            return Some(response.clone());
        }

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so `/rides/1/complete` beats `/rides/1`
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| !pattern.contains(' ') && url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request(method, url, headers, body);

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.get_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_mock_get_success() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://api.example.com/profile",
            MockResponse::Success(Response::new(200, Bytes::from("Hello"))),
        );

        let response = client
            .get("https://api.example.com/profile", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("Hello"));
    }

    #[tokio::test]
    async fn test_mock_method_specific_response_wins() {
        let client = MockHttpClient::new();
        client.set_response("http://api/rides/1", MockResponse::json(200, serde_json::json!({"a": 1})));
        client.set_response_for(
            HttpMethod::Patch,
            "http://api/rides/1",
            MockResponse::json(500, serde_json::json!({"message": "nope"})),
        );

        let get = client.get("http://api/rides/1", &Headers::new()).await.unwrap();
        assert_eq!(get.status, 200);

        let patch = client
            .patch("http://api/rides/1", Some("{}"), &Headers::new())
            .await
            .unwrap();
        assert_eq!(patch.status, 500);
    }

    #[tokio::test]
    async fn test_mock_longest_prefix_match() {
        let client = MockHttpClient::new();
        client.set_response("http://api/rides", MockResponse::json(200, serde_json::json!(1)));
        client.set_response("http://api/rides/9", MockResponse::json(201, serde_json::json!(2)));

        let response = client
            .patch("http://api/rides/9/complete", None, &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_mock_error_and_missing() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://api/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("http://api/down", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));

        let result = client.get("http://api/unknown", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::json(200, serde_json::Value::Null));

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer abc".to_string());
        let _ = client
            .post("http://api/auth/login", r#"{"pin":"1234"}"#, &headers)
            .await;

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer abc".to_string())
        );
        assert_eq!(requests[0].json_body().unwrap()["pin"], "1234");
        assert_eq!(client.requests_to(HttpMethod::Post, "/auth/login").len(), 1);

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
