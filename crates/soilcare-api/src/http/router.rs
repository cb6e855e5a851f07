//! Axum router configuration with middleware.
//!
//! Route paths match the public client contract, so auth routes sit at the
//! root while the agent lives under `/api/agents`. Middleware: CORS,
//! tracing, raised body limit for image uploads.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Largest accepted request body. Multipart image uploads exceed axum's
/// 2 MB default cap.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Accounts
        .route("/sign-up", post(handlers::auth::sign_up))
        .route("/sign-in", post(handlers::auth::sign_in))
        // Agent
        .route("/api/agents", post(handlers::agent::ask_agent))
        // Chat history
        .route("/chat", get(handlers::chat::chat_history))
        // Image upload
        .route("/upload/image", post(handlers::upload::upload_image))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
