//! Result type alias for tutor operations.

use super::tutor_error::TutorError;

/// Type alias for Results using TutorError.
pub type TutorResult<T> = Result<T, TutorError>;

/// Extension trait for logging an error once at the point it is dropped or converted.
pub trait ResultExt<T> {
    /// Log the error with its category and code, then pass the result through.
    fn log_err(self, operation: &str) -> TutorResult<T>;
}

impl<T> ResultExt<T> for TutorResult<T> {
    fn log_err(self, operation: &str) -> TutorResult<T> {
        if let Err(err) = &self {
            if err.category().is_user_facing() {
                tracing::debug!(operation, code = err.error_code(), "{}", err);
            } else {
                tracing::warn!(
                    operation,
                    category = %err.category(),
                    code = err.error_code(),
                    "{}",
                    err
                );
            }
        }
        self
    }
}
