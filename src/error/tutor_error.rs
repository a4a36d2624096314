//! Unified error type for the tutor service.

use thiserror::Error;

use super::category::ErrorCategory;
use super::query::QueryError;
use super::validation::ValidationError;

/// Unified error type.
///
/// Handlers return this so rejected input and startup problems share one
/// logging path. Query failures normally never reach it: the query service
/// turns them into a displayable string first.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Rejected user input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// External call failure.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Invalid configuration value.
    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    /// Socket or filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TutorError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TutorError::Validation(_) => ErrorCategory::User,
            TutorError::Query(err) => err.category(),
            TutorError::Config { .. } | TutorError::Io(_) => ErrorCategory::Configuration,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TutorError::Validation(err) => err.error_code(),
            TutorError::Query(err) => err.error_code(),
            TutorError::Config { .. } => "CFG_INVALID",
            TutorError::Io(_) => "SYS_IO",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            TutorError::Validation(err) => err.user_message(),
            other => format!("{}. {}", other, other.category().recovery_hint()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_category() {
        let err: TutorError = ValidationError::EmptyTopic.into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert_eq!(err.user_message(), "Por favor, escribe una pregunta.");
        assert_eq!(err.error_code(), "VAL_EMPTY_TOPIC");
    }

    #[test]
    fn test_query_category_passthrough() {
        let err: TutorError = QueryError::MissingApiKey.into();
        assert_eq!(err.category(), ErrorCategory::Auth);
        assert!(err.user_message().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_config_error_display() {
        let err = TutorError::Config {
            key: "TUTOR_BIND".to_string(),
            message: "invalid socket address".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration for TUTOR_BIND: invalid socket address"
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err: TutorError = io_err.into();
        assert!(matches!(err, TutorError::Io(_)));
        assert_eq!(err.error_code(), "SYS_IO");
    }
}
