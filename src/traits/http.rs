//! HTTP client trait abstraction.
//!
//! The tutor backend only ever POSTs a JSON body to the chat-completion
//! endpoint, so the trait is limited to that. Tests swap in
//! [`crate::adapters::mock::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a 200 response with a JSON body.
    pub fn json_ok(value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::with_headers(200, headers, Bytes::from(value.to_string()))
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string, replacing invalid UTF-8.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures. Non-2xx statuses are not errors at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Other error
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for posting requests to an upstream HTTP API.
///
/// # Example
///
/// ```ignore
/// use tutor::traits::{HttpClient, Headers};
///
/// async fn ping<C: HttpClient>(client: &C) -> Result<u16, HttpError> {
///     let response = client.post("https://api.example.com/ping", "{}", &Headers::new()).await?;
///     Ok(response.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a POST request.
    ///
    /// # Arguments
    /// * `url` - The URL to request
    /// * `body` - Request body as a string
    /// * `headers` - Request headers
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}
