//! The tutor query service.
//!
//! Wraps a [`TutorBackend`] and guarantees the caller always gets a string to
//! display: either the model's text or `Error generating response: <details>`.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::TutorBackend;
use crate::error::{QueryError, ValidationError};
use crate::models::LearningStyle;

/// Prefix of the string shown in place of an answer when the call fails.
pub const ERROR_PREFIX: &str = "Error generating response";

/// A validated tutor query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    topic: String,
    style: LearningStyle,
}

impl Query {
    /// Validate the topic. Empty or whitespace-only topics are rejected.
    pub fn new(topic: &str, style: LearningStyle) -> Result<Self, ValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            style,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn style(&self) -> LearningStyle {
        self.style
    }
}

/// The outcome of a query, always displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum TutorReply {
    /// The model's completion, unaltered.
    Answer(String),
    /// The formatted error string.
    Failed(String),
}

impl TutorReply {
    /// Text to display.
    pub fn text(&self) -> &str {
        match self {
            TutorReply::Answer(text) | TutorReply::Failed(text) => text,
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, TutorReply::Answer(_))
    }

    pub fn into_text(self) -> String {
        match self {
            TutorReply::Answer(text) | TutorReply::Failed(text) => text,
        }
    }
}

impl fmt::Display for TutorReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Render an upstream failure as the displayable error string.
pub fn format_error(err: &dyn fmt::Display) -> String {
    format!("{}: {}", ERROR_PREFIX, err)
}

/// Service turning validated queries into displayable replies.
#[derive(Clone)]
pub struct TutorQueryService {
    backend: Arc<dyn TutorBackend>,
}

impl TutorQueryService {
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self { backend }
    }

    /// Run one query. Failures are logged and converted, never returned.
    pub async fn answer(&self, query: &Query) -> TutorReply {
        match self.backend.ask(query.topic(), query.style()).await {
            Ok(text) => {
                tracing::info!(style = %query.style(), bytes = text.len(), "Tutor answered");
                TutorReply::Answer(text)
            }
            Err(err) => {
                log_failure(&err);
                TutorReply::Failed(format_error(&err))
            }
        }
    }

    /// Validate then answer. A rejected topic never reaches the backend.
    pub async fn ask(&self, topic: &str, style: LearningStyle) -> Result<TutorReply, ValidationError> {
        let query = Query::new(topic, style)?;
        Ok(self.answer(&query).await)
    }
}

fn log_failure(err: &QueryError) {
    tracing::warn!(
        category = %err.category(),
        code = err.error_code(),
        "Tutor query failed: {}",
        err
    );
}
