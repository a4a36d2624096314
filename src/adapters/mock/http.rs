//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors and records every request so tests
//! can inspect the JSON sent upstream.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: String,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
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

/// Mock HTTP client for testing.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_default_response(MockResponse::Success(Response::new(200, "{}")));
/// client.post("https://api.example.com/x", "{}", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL (exact, then prefix)
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL or URL prefix.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, url: &str, headers: &Headers, body: &str) {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers, body);

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exact_match_and_recording() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://api.test/chat/completions",
            MockResponse::Success(Response::new(200, "ok")),
        );

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer k".to_string());
        let response = client
            .post("https://api.test/chat/completions", r#"{"a":1}"#, &headers)
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].json()["a"], 1);
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer k".to_string())
        );
    }

    #[tokio::test]
    async fn test_prefix_match() {
        let client = MockHttpClient::new();
        client.set_response("https://api.test/", MockResponse::Success(Response::new(201, "")));
        let response = client
            .post("https://api.test/anything", "", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::Timeout("1s".to_string())));
        let result = client.post("https://x", "", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("1s".to_string()));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.post("https://x", "", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
