//! Stub tutor backend for testing.
//!
//! Returns canned text or a canned failure and records each (topic, style)
//! it was asked about.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::QueryError;
use crate::models::LearningStyle;
use crate::tutor::TutorBackend;

/// Stub backend with a fixed outcome.
#[derive(Debug, Clone)]
pub struct MockTutor {
    outcome: Arc<Mutex<Result<String, QueryError>>>,
    calls: Arc<Mutex<Vec<(String, LearningStyle)>>>,
}

impl MockTutor {
    /// A backend that always answers with `text`.
    pub fn answering(text: impl Into<String>) -> Self {
        Self::with_outcome(Ok(text.into()))
    }

    /// A backend that always fails with `err`.
    pub fn failing(err: QueryError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<String, QueryError>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Change the outcome of later calls.
    pub fn set_outcome(&self, outcome: Result<String, QueryError>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    /// Every (topic, style) received, in order.
    pub fn calls(&self) -> Vec<(String, LearningStyle)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TutorBackend for MockTutor {
    async fn ask(&self, topic: &str, style: LearningStyle) -> Result<String, QueryError> {
        self.calls.lock().unwrap().push((topic.to_string(), style));
        self.outcome.lock().unwrap().clone()
    }
}
