//! Chat message types for SoilCare.
//!
//! A ChatMessage is one persisted turn in a user's conversation with the
//! assistant: either a question (or image upload) from the user, or an
//! answer from the assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Author of a persisted chat turn.
///
/// This is the closed set of roles allowed in storage; maps to the CHECK
/// constraint in the SQLite schema:
/// `CHECK (role IN ('user', 'assistant'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single persisted turn in a user's conversation.
///
/// Messages are append-only and ordered by `created_at` (ids are UUIDv7,
/// so they sort in creation order as a tiebreaker). The text body may be
/// empty -- an image upload produces a message whose content is only its
/// image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: MessageRole,
    pub text: String,
    /// Zero or more public URLs of images attached to this turn.
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a new message for `user_id` with a fresh id and timestamp.
    pub fn new(user_id: Uuid, role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            role,
            text: text.into(),
            image_urls: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Build an image-upload message: role `user`, empty text, one URL.
    pub fn image_upload(user_id: Uuid, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            role: MessageRole::User,
            text: String::new(),
            image_urls: vec![url.into()],
            created_at: Utc::now(),
        }
    }
}
