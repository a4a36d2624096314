//! OpenAI chat-completion backend.
//!
//! Sends one `POST {base_url}/chat/completions` per query with a system
//! message, the templated user prompt, the fixed model and temperature.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::prompt::{build_prompt, MODEL, SYSTEM_INSTRUCTION, TEMPERATURE};
use super::TutorBackend;
use crate::adapters::ReqwestHttpClient;
use crate::error::QueryError;
use crate::models::LearningStyle;
use crate::startup::TutorConfig;
use crate::traits::{Headers, HttpClient};

/// Default base URL of the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [RequestMessage<'a>; 2],
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Tutor backend talking to an OpenAI-compatible chat-completion endpoint.
pub struct OpenAiTutor {
    http: Arc<dyn HttpClient>,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiTutor {
    /// Create a backend over any HTTP client.
    ///
    /// An empty key is treated as missing.
    pub fn new(
        http: Arc<dyn HttpClient>,
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into(),
        }
    }

    /// Create the production backend from configuration.
    pub fn from_config(config: &TutorConfig) -> Self {
        Self::new(
            Arc::new(ReqwestHttpClient::new()),
            config.api_key.clone(),
            config.base_url.clone(),
        )
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the chat-completion endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// JSON body for a query.
    fn request_body(topic: &str, style: LearningStyle) -> Result<String, QueryError> {
        let prompt = build_prompt(topic, style);
        let request = ChatCompletionRequest {
            model: MODEL,
            messages: [
                RequestMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                RequestMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: TEMPERATURE,
        };
        serde_json::to_string(&request).map_err(|e| QueryError::MalformedResponse(e.to_string()))
    }

    /// Extract the first choice's text, unaltered.
    fn completion_text(body: &[u8]) -> Result<String, QueryError> {
        let parsed: ChatCompletionResponse = serde_json::from_slice(body)
            .map_err(|e| QueryError::MalformedResponse(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(QueryError::EmptyCompletion)
    }
}

#[async_trait]
impl TutorBackend for OpenAiTutor {
    async fn ask(&self, topic: &str, style: LearningStyle) -> Result<String, QueryError> {
        let api_key = self.api_key.as_deref().ok_or(QueryError::MissingApiKey)?;

        let body = Self::request_body(topic, style)?;
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Authorization".to_string(), format!("Bearer {}", api_key));

        let url = self.endpoint();
        tracing::info!(%style, model = MODEL, "Sending tutor query");

        let response = self.http.post(&url, &body, &headers).await?;

        if !response.is_success() {
            return Err(QueryError::from_status(response.status, &response.text_lossy()));
        }

        Self::completion_text(&response.body)
    }
}
