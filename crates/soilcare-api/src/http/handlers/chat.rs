//! Chat history handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use soilcare_types::chat::ChatMessage;

use crate::http::error::ApiError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ChatHistoryResponse {
    message: String,
    chats: Vec<ChatMessage>,
}

/// GET /chat - Full chat history for the caller, oldest first.
pub async fn chat_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ChatHistoryResponse>, ApiError> {
    let chats = state.chat_service.history(&user_id).await?;

    Ok(Json(ChatHistoryResponse {
        message: "Chats fetched".to_string(),
        chats,
    }))
}
