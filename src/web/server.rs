//! HTTP server.

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tokio::task::JoinHandle;

use super::handlers;
use super::AppState;
use crate::error::TutorResult;

/// Build the router with all routes.
///
/// Same-origin only: there is no CORS layer, so cross-origin pages cannot
/// read `/api/*` responses.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/quiz", get(handlers::quiz))
        .route("/api/session", get(handlers::get_session))
        .route("/api/session/quiz-mode", post(handlers::set_quiz_mode))
        .route("/api/style", post(handlers::select_style))
        .route("/api/style/detect", post(handlers::detect_style))
        .route("/api/ask", post(handlers::ask))
        .with_state(state)
}

/// Start the server on a background task.
///
/// Returns the task handle and the bound address, which differs from `addr`
/// when binding port 0.
pub async fn start_server_on(
    addr: SocketAddr,
    state: AppState,
) -> TutorResult<(JoinHandle<()>, SocketAddr)> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;
    let app = router(state);

    tracing::info!("Tutor listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Serve in the foreground until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> TutorResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Tutor listening on http://{}", actual_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
