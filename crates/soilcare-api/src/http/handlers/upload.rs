//! Image upload handler.
//!
//! Accepts a multipart form with a single `file` field, spools the bytes
//! to a temp file, hands that to the image service, then deletes the
//! spool file whether or not ingestion succeeded.

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use tracing::warn;

use soilcare_types::chat::ChatMessage;

use crate::http::error::ApiError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    url: String,
    chat: ChatMessage,
}

/// POST /upload/image - Host an image and record it as a chat turn.
pub async fn upload_image(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("failed to read upload: {e}")))?;
            file = Some((file_name, bytes));
            break;
        }
    }

    let Some((file_name, bytes)) = file else {
        return Err(ApiError::Validation("no file uploaded".to_string()));
    };

    // Spool to disk so the host client reads a real file path.
    let spool_path =
        std::env::temp_dir().join(format!("soilcare-upload-{}", uuid::Uuid::now_v7()));
    tokio::fs::write(&spool_path, &bytes)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to spool upload: {e}")))?;

    let result = state
        .image_service
        .ingest(user_id, &spool_path, &file_name)
        .await;

    // Deleted on success and failure alike. A deletion failure is logged,
    // never surfaced to the caller.
    if let Err(e) = tokio::fs::remove_file(&spool_path).await {
        warn!(path = %spool_path.display(), error = %e, "failed to delete spooled upload");
    }

    let (url, chat) = result?;
    Ok(Json(UploadResponse { url, chat }))
}
