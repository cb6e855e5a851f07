//! Image intake: external object storage plus the chat record of it.
//!
//! Defines the `ImageStore` trait (implemented in soilcare-infra) and the
//! `ImageService` that turns a spooled upload into a hosted URL and a
//! persisted chat turn.

use std::path::Path;

use tracing::info;
use uuid::Uuid;

use soilcare_types::chat::ChatMessage;
use soilcare_types::error::{StorageError, UploadError};

use crate::chat::repository::ChatRepository;

/// Trait for external image hosting backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in soilcare-infra (e.g., `HttpImageStore`).
pub trait ImageStore: Send + Sync {
    /// Upload the file at `path`, returning its public URL.
    ///
    /// `file_name` is the client's original name; backends may use it for
    /// the hosted object's display name. The local file is left in place
    /// -- callers own its lifecycle.
    fn upload(
        &self,
        path: &Path,
        file_name: &str,
    ) -> impl std::future::Future<Output = Result<String, StorageError>> + Send;
}

/// Uploads an image and records it as a chat turn.
///
/// The recorded message has role `user`, empty text, and the hosted URL
/// as its single image reference. Nothing is persisted when the upload
/// itself fails.
pub struct ImageService<C: ChatRepository, S: ImageStore> {
    repo: C,
    store: S,
}

impl<C: ChatRepository, S: ImageStore> ImageService<C, S> {
    pub fn new(repo: C, store: S) -> Self {
        Self { repo, store }
    }

    /// Upload the spooled file and append the resulting chat message.
    ///
    /// Returns the hosted URL alongside the persisted message. The caller
    /// keeps responsibility for deleting the spooled file afterwards,
    /// whether this succeeds or not.
    pub async fn ingest(
        &self,
        user_id: Uuid,
        path: &Path,
        file_name: &str,
    ) -> Result<(String, ChatMessage), UploadError> {
        let url = self
            .store
            .upload(path, file_name)
            .await
            .map_err(|e| UploadError::Host(e.to_string()))?;

        let message = ChatMessage::image_upload(user_id, url.clone());
        let saved = self
            .repo
            .save_message(&message)
            .await
            .map_err(|e| UploadError::Storage(e.to_string()))?;

        info!(user_id = %user_id, url = %url, "image recorded");
        Ok((url, saved))
    }
}
