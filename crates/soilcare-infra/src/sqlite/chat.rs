//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `soilcare-core` using sqlx with split
//! read/write pools. Follows the same patterns as `SqliteUserRepository`:
//! raw queries, a private Row struct, reader for SELECTs, writer for INSERTs.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use soilcare_core::chat::repository::ChatRepository;
use soilcare_types::chat::{ChatMessage, MessageRole};
use soilcare_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
#[derive(Clone)]
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatMessage.
struct ChatMessageRow {
    id: String,
    user_id: String,
    role: String,
    text: String,
    image_urls: String,
    created_at: String,
}

impl ChatMessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            role: row.try_get("role")?,
            text: row.try_get("text")?,
            image_urls: row.try_get("image_urls")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| RepositoryError::Query(format!("invalid user_id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let image_urls: Vec<String> = serde_json::from_str(&self.image_urls)
            .map_err(|e| RepositoryError::Query(format!("invalid image_urls: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(ChatMessage {
            id,
            user_id,
            role,
            text: self.text,
            image_urls,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

const INSERT_MESSAGE: &str =
    "INSERT INTO chat_messages (id, user_id, role, text, image_urls, created_at)
     VALUES (?, ?, ?, ?, ?, ?)";

impl ChatRepository for SqliteChatRepository {
    async fn save_message(&self, message: &ChatMessage) -> Result<ChatMessage, RepositoryError> {
        let urls_json = serde_json::to_string(&message.image_urls)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query(INSERT_MESSAGE)
            .bind(message.id.to_string())
            .bind(message.user_id.to_string())
            .bind(message.role.to_string())
            .bind(&message.text)
            .bind(urls_json)
            .bind(format_datetime(&message.created_at))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(message.clone())
    }

    async fn recent_messages(
        &self,
        user_id: &Uuid,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        // id is a UUIDv7 so it breaks created_at ties in creation order.
        let rows = sqlx::query(
            "SELECT * FROM chat_messages WHERE user_id = ?
             ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                ChatMessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn list_messages(&self, user_id: &Uuid) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM chat_messages WHERE user_id = ?
             ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                ChatMessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn append_exchange(
        &self,
        question: &ChatMessage,
        answer: &ChatMessage,
    ) -> Result<(), RepositoryError> {
        // Both rows in one transaction: a question never lands without
        // its answer.
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        for message in [question, answer] {
            let urls_json = serde_json::to_string(&message.image_urls)
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

            sqlx::query(INSERT_MESSAGE)
                .bind(message.id.to_string())
                .bind(message.user_id.to_string())
                .bind(message.role.to_string())
                .bind(&message.text)
                .bind(urls_json)
                .bind(format_datetime(&message.created_at))
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}
