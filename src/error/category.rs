//! Error category classification.
//!
//! Categories drive logging levels and the hint shown next to a failed answer.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout talking to the model provider.
    Network,

    /// Missing or rejected API key.
    Auth,

    /// Provider-side failures (HTTP 5xx, quota exceeded).
    Server,

    /// The provider answered with something we could not read.
    Client,

    /// User input was rejected before any call was made.
    User,

    /// The service is misconfigured (bad bind address, bad base URL).
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Check that OPENAI_API_KEY is set to a valid key",
            ErrorCategory::Server => {
                "The model provider may be experiencing issues. Please try again later"
            }
            ErrorCategory::Client => "The provider returned an unexpected answer",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::Configuration => "Check your configuration settings",
        }
    }

    /// Whether errors of this category come from the user rather than the service.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ErrorCategory::User)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Network.as_str(), "network");
        assert_eq!(ErrorCategory::Auth.as_str(), "auth");
        assert_eq!(ErrorCategory::Server.as_str(), "server");
        assert_eq!(ErrorCategory::Client.as_str(), "client");
        assert_eq!(ErrorCategory::User.as_str(), "user");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Auth), "auth");
    }

    #[test]
    fn test_user_facing() {
        assert!(ErrorCategory::User.is_user_facing());
        assert!(!ErrorCategory::Network.is_user_facing());
    }

    #[test]
    fn test_auth_hint_mentions_key() {
        assert!(ErrorCategory::Auth.recovery_hint().contains("OPENAI_API_KEY"));
    }
}
