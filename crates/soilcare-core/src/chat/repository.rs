//! ChatRepository trait definition.
//!
//! Append-only persistence for chat messages. Follows the same RPITIT
//! pattern as UserRepository.

use soilcare_types::chat::ChatMessage;
use soilcare_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for chat message persistence.
///
/// Implementations live in soilcare-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Messages
/// are never updated or deleted; every write is an insert.
pub trait ChatRepository: Send + Sync {
    /// Insert a single message.
    fn save_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<ChatMessage, RepositoryError>> + Send;

    /// The most recent `limit` messages for a user, newest first.
    fn recent_messages(
        &self,
        user_id: &Uuid,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// All messages for a user in creation order (oldest first).
    fn list_messages(
        &self,
        user_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Insert a question/answer pair atomically.
    ///
    /// Both rows land or neither does; a crash mid-append can never leave
    /// a question without its answer. The question must precede the answer
    /// in creation order.
    fn append_exchange(
        &self,
        question: &ChatMessage,
        answer: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
