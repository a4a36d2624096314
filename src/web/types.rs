//! Request and response bodies of the JSON API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::classifier::StyleTally;
use crate::error::{TutorError, ValidationError};
use crate::models::LearningStyle;
use crate::state::SessionState;

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    /// Model text, or the formatted error string
    pub response: String,
    pub style: LearningStyle,
    /// False when `response` is an error string
    pub ok: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectRequest {
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectResponse {
    pub style: LearningStyle,
    pub label: String,
    pub tally: StyleTally,
    pub message: String,
}

impl DetectResponse {
    pub fn new(tally: StyleTally) -> Self {
        let style = tally.decide();
        Self {
            style,
            label: style.label().to_string(),
            tally,
            message: format!("Estilo detectado: {}", style.label()),
        }
    }
}

/// Manual selection. The style is kept as text so unknown values get a
/// validation error rather than a JSON rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectStyleRequest {
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleResponse {
    pub style: LearningStyle,
    pub label: String,
    pub message: String,
}

impl StyleResponse {
    pub fn new(style: LearningStyle) -> Self {
        Self {
            style,
            label: style.label().to_string(),
            message: format!("Estilo actual: {}", style.label()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizModeRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub style: LearningStyle,
    pub label: String,
    pub quiz_mode: bool,
    /// Counts from the last quiz; null after a manual selection
    pub last_tally: Option<StyleTally>,
}

impl From<&SessionState> for SessionResponse {
    fn from(state: &SessionState) -> Self {
        Self {
            style: state.style,
            label: state.style.label().to_string(),
            quiz_mode: state.quiz_mode,
            last_tally: state.last_tally,
        }
    }
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningResponse {
    pub warning: String,
    pub code: String,
}

impl TutorError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            TutorError::Validation(ValidationError::EmptyTopic) => StatusCode::UNPROCESSABLE_ENTITY,
            TutorError::Validation(_) => StatusCode::BAD_REQUEST,
            TutorError::Query(_) => StatusCode::BAD_GATEWAY,
            TutorError::Config { .. } | TutorError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TutorError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "Request failed: {}", self);
        } else {
            tracing::debug!(code = self.error_code(), "Request rejected: {}", self);
        }
        let body = WarningResponse {
            warning: self.user_message(),
            code: self.error_code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
