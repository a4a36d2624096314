//! Errors from the external chat-completion call.
//!
//! Every variant ends up rendered into the "Error generating response" string;
//! the variants exist so the cause is logged with the right category.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Failure of a single tutor query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No API key was configured at startup.
    #[error("Authentication failed: no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    /// Transport failure before any response arrived.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The provider rejected the API key (401/403).
    #[error("Authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Rate limit or quota exceeded (429).
    #[error("Quota exceeded or rate limited: {message}")]
    QuotaExceeded { message: String },

    /// Any other non-2xx status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The body could not be decoded as a chat completion.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The completion had no choice or no message content.
    #[error("Malformed response: no completion text in response")]
    EmptyCompletion,
}

impl QueryError {
    /// Build the error for a non-2xx status, extracting the provider's message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = provider_message(body);
        match status {
            401 | 403 => QueryError::Unauthorized { status, message },
            429 => QueryError::QuotaExceeded { message },
            _ => QueryError::Api { status, message },
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            QueryError::MissingApiKey | QueryError::Unauthorized { .. } => ErrorCategory::Auth,
            QueryError::Transport(HttpError::InvalidUrl(_)) => ErrorCategory::Configuration,
            QueryError::Transport(_) => ErrorCategory::Network,
            QueryError::QuotaExceeded { .. } => ErrorCategory::Server,
            QueryError::Api { status, .. } if *status >= 500 => ErrorCategory::Server,
            QueryError::Api { .. } => ErrorCategory::Client,
            QueryError::MalformedResponse(_) | QueryError::EmptyCompletion => ErrorCategory::Client,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::MissingApiKey => "QRY_MISSING_KEY",
            QueryError::Transport(_) => "QRY_TRANSPORT",
            QueryError::Unauthorized { .. } => "QRY_UNAUTHORIZED",
            QueryError::QuotaExceeded { .. } => "QRY_QUOTA",
            QueryError::Api { .. } => "QRY_API_STATUS",
            QueryError::MalformedResponse(_) => "QRY_MALFORMED",
            QueryError::EmptyCompletion => "QRY_EMPTY",
        }
    }
}

/// Pull `error.message` out of an OpenAI-style error body, else use the raw body.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no details".to_string()
            } else {
                trimmed.to_string()
            }
        })
}
