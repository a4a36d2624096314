//! Input validation errors.
//!
//! These are raised before any call to the model provider is made.

use thiserror::Error;

/// Warning shown when the topic is empty or whitespace.
pub const EMPTY_TOPIC_WARNING: &str = "Por favor, escribe una pregunta.";

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Topic was empty or only whitespace.
    #[error("topic is empty")]
    EmptyTopic,

    /// Quiz submission did not carry one answer per question.
    #[error("expected {expected} answers, got {got}")]
    WrongAnswerCount { expected: usize, got: usize },

    /// Manual selection named no known style.
    #[error("unknown learning style: {0}")]
    UnknownStyle(String),
}

impl ValidationError {
    /// Get a user-friendly message for the page.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptyTopic => EMPTY_TOPIC_WARNING.to_string(),
            ValidationError::WrongAnswerCount { expected, .. } => {
                format!("Por favor, responde las {} preguntas.", expected)
            }
            ValidationError::UnknownStyle(style) => {
                format!("Estilo de aprendizaje desconocido: {}", style)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyTopic => "VAL_EMPTY_TOPIC",
            ValidationError::WrongAnswerCount { .. } => "VAL_ANSWER_COUNT",
            ValidationError::UnknownStyle(_) => "VAL_UNKNOWN_STYLE",
        }
    }
}

impl From<crate::models::UnknownStyle> for ValidationError {
    fn from(err: crate::models::UnknownStyle) -> Self {
        ValidationError::UnknownStyle(err.0)
    }
}
