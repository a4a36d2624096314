//! Route handlers.
//!
//! Every handler takes the session from the cookie and returns through
//! [`SessionCookie::attach`] so a new browser gets its cookie on first contact.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Json, Response};

use super::html::PAGE_HTML;
use super::session::SessionCookie;
use super::types::{
    AskRequest, AskResponse, DetectRequest, DetectResponse, QuizModeRequest, SelectStyleRequest,
    SessionResponse, StyleResponse,
};
use super::AppState;
use crate::error::{TutorError, ValidationError};
use crate::models::{LearningStyle, QUIZ};

/// `GET /`
pub async fn index(session: SessionCookie) -> Response {
    session.attach(Html(PAGE_HTML))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

/// `GET /api/quiz`
pub async fn quiz() -> impl IntoResponse {
    Json(QUIZ)
}

/// `GET /api/session`
pub async fn get_session(session: SessionCookie, State(state): State<AppState>) -> Response {
    let snapshot = state.sessions.get(session.id).await;
    session.attach(Json(SessionResponse::from(&snapshot)))
}

/// `POST /api/session/quiz-mode`
pub async fn set_quiz_mode(
    session: SessionCookie,
    State(state): State<AppState>,
    Json(req): Json<QuizModeRequest>,
) -> Response {
    let snapshot = state
        .sessions
        .update(session.id, |s| {
            s.set_quiz_mode(req.enabled);
            s.clone()
        })
        .await;
    session.attach(Json(SessionResponse::from(&snapshot)))
}

/// `POST /api/style/detect`
pub async fn detect_style(
    session: SessionCookie,
    State(state): State<AppState>,
    Json(req): Json<DetectRequest>,
) -> Response {
    let result = state
        .sessions
        .update(session.id, |s| s.apply_quiz(req.answers.as_slice()))
        .await;

    match result {
        Ok(tally) => {
            let response = DetectResponse::new(tally);
            tracing::info!(
                session = %session.id,
                style = %response.style,
                visual = tally.visual,
                auditory = tally.auditory,
                textual = tally.textual,
                "Detected learning style"
            );
            session.attach(Json(response))
        }
        Err(err) => session.attach(TutorError::from(err)),
    }
}

/// `POST /api/style`
pub async fn select_style(
    session: SessionCookie,
    State(state): State<AppState>,
    Json(req): Json<SelectStyleRequest>,
) -> Response {
    let style: LearningStyle = match req.style.parse() {
        Ok(style) => style,
        Err(err) => {
            return session.attach(TutorError::from(ValidationError::from(err)));
        }
    };

    state
        .sessions
        .update(session.id, |s| s.select_style(style))
        .await;
    tracing::debug!(session = %session.id, style = %style, "Selected learning style");
    session.attach(Json(StyleResponse::new(style)))
}

/// `POST /api/ask`
///
/// Blank topics are rejected with 422 before any upstream call. Otherwise the
/// reply is always 200: upstream failures arrive as the error string.
pub async fn ask(
    session: SessionCookie,
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Response {
    // Snapshot first; no lock is held across the upstream call.
    let style = state.sessions.get(session.id).await.style;

    match state.tutor.ask(&req.topic, style).await {
        Ok(reply) => {
            let ok = reply.is_answer();
            session.attach(Json(AskResponse {
                response: reply.into_text(),
                style,
                ok,
            }))
        }
        Err(err) => session.attach(TutorError::from(err)),
    }
}
