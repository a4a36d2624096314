//! Startup: configuration, logging and service wiring.
//!
//! - [`config`] - `TutorConfig` from the environment and `.env`
//! - [`logging`] - tracing subscriber
//!
//! ```ignore
//! use tutor::startup::{build_state, TutorConfig};
//!
//! let config = TutorConfig::from_env()?;
//! let state = build_state(&config);
//! ```

pub mod config;
pub mod logging;

pub use config::{load_dotenv, TutorConfig};
pub use logging::init_tracing;

use std::sync::Arc;

use crate::tutor::{OpenAiTutor, TutorQueryService};
use crate::web::AppState;

/// Wire the production backend into the web state.
pub fn build_state(config: &TutorConfig) -> AppState {
    let backend = OpenAiTutor::from_config(config);
    if !backend.has_api_key() {
        tracing::warn!(
            "{} is not set; every query will report an authentication error",
            config::API_KEY_ENV
        );
    }
    AppState::new(TutorQueryService::new(Arc::new(backend)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_state_without_key_still_answers_with_error() {
        let state = build_state(&TutorConfig::default());
        let reply = state
            .tutor
            .ask("Algebra", crate::models::LearningStyle::Textual)
            .await
            .unwrap();
        assert!(!reply.is_answer());
        assert!(reply
            .text()
            .starts_with("Error generating response: Authentication failed"));
    }
}
