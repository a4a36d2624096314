//! Web surface.
//!
//! Serves the single HTML page and the JSON API it calls:
//! - `GET /` - the page
//! - `GET /api/quiz` - the fixed questions
//! - `GET /api/session` - current style and quiz toggle
//! - `POST /api/session/quiz-mode` - toggle the quiz
//! - `POST /api/style/detect` - classify quiz answers
//! - `POST /api/style` - manual selection
//! - `POST /api/ask` - query the tutor
//! - `GET /health` - liveness

pub mod handlers;
pub mod html;
pub mod server;
pub mod session;
pub mod types;

use crate::state::SessionStore;
use crate::tutor::TutorQueryService;

pub use server::{router, serve, start_server_on};
pub use session::{SessionCookie, SESSION_COOKIE};

/// Shared state for the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Query pipeline
    pub tutor: TutorQueryService,
    /// Per-browser sessions
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(tutor: TutorQueryService) -> Self {
        Self {
            tutor,
            sessions: SessionStore::new(),
        }
    }
}
