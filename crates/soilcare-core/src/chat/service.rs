//! Chat history reads.

use soilcare_types::chat::ChatMessage;
use soilcare_types::error::RepositoryError;
use uuid::Uuid;

use crate::chat::repository::ChatRepository;

/// Read side of the chat history.
///
/// Writes happen through `AgentService` (question/answer exchanges) and
/// `ImageService` (image-upload turns); this service only lists what they
/// appended.
pub struct ChatService<C: ChatRepository> {
    repo: C,
}

impl<C: ChatRepository> ChatService<C> {
    pub fn new(repo: C) -> Self {
        Self { repo }
    }

    /// All of a user's messages, oldest first.
    ///
    /// Read-only: calling this twice without an intervening write returns
    /// identical results.
    pub async fn history(&self, user_id: &Uuid) -> Result<Vec<ChatMessage>, RepositoryError> {
        self.repo.list_messages(user_id).await
    }
}
