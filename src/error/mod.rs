//! Error handling for the tutor service.
//!
//! - **Error Categories**: classification used for logging and hints
//! - **Validation errors**: rejected input, no external call made
//! - **Query errors**: any failure of the external chat-completion call
//! - **Unified Error Type**: `TutorError` consolidates both plus startup failures
//!
//! | Category | Description |
//! |----------|-------------|
//! | Network | Connection, DNS, timeout |
//! | Auth | Missing or rejected API key |
//! | Server | Provider errors (5xx), quota |
//! | Client | Unreadable provider response |
//! | User | Rejected input |
//! | Configuration | Bad settings |

mod category;
mod query;
mod result;
mod tutor_error;
mod validation;

pub use category::ErrorCategory;
pub use query::QueryError;
pub use result::{ResultExt, TutorResult};
pub use tutor_error::TutorError;
pub use validation::{ValidationError, EMPTY_TOPIC_WARNING};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::traits::HttpError;

    #[test]
    fn test_error_unification() {
        let errors: Vec<TutorError> = vec![
            ValidationError::EmptyTopic.into(),
            QueryError::MissingApiKey.into(),
            QueryError::Transport(HttpError::Timeout("30s".to_string())).into(),
            QueryError::from_status(500, "boom").into(),
            QueryError::EmptyCompletion.into(),
        ];

        let categories: Vec<ErrorCategory> = errors.iter().map(|e| e.category()).collect();
        assert_eq!(
            categories,
            vec![
                ErrorCategory::User,
                ErrorCategory::Auth,
                ErrorCategory::Network,
                ErrorCategory::Server,
                ErrorCategory::Client,
            ]
        );

        for err in &errors {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }
}
