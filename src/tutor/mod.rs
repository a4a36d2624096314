//! Tutor query pipeline: prompt template, backend seam and the service that
//! turns every outcome into a displayable string.

pub mod openai;
pub mod prompt;
pub mod service;

use async_trait::async_trait;

use crate::error::QueryError;
use crate::models::LearningStyle;

pub use openai::{OpenAiTutor, DEFAULT_BASE_URL};
pub use prompt::{build_prompt, MODEL, SYSTEM_INSTRUCTION, TEMPERATURE};
pub use service::{format_error, Query, TutorQueryService, TutorReply, ERROR_PREFIX};

/// Narrow interface to the external model: (topic, style) → completion text.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// Ask the model to explain `topic` for the given learning style.
    async fn ask(&self, topic: &str, style: LearningStyle) -> Result<String, QueryError>;
}
