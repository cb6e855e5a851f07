//! LLM request/response types for SoilCare.
//!
//! These types model the data shapes for the assistant completion call:
//! prompt messages, completion requests, and responses. They are
//! provider-neutral; the wire format lives in `soilcare-infra`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chat::MessageRole;

/// Role of a message in an LLM prompt.
///
/// Unlike [`MessageRole`], this includes `system` -- the system instruction
/// exists only in prompts, never in persisted chat history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl From<MessageRole> for Role {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => Role::User,
            MessageRole::Assistant => Role::Assistant,
        }
    }
}

/// A single message in an LLM prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

/// Response from an LLM provider for a completion.
///
/// `content` is the first choice's text; empty when the provider returned
/// no usable content (the caller decides what to do with an empty answer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_role_from_message_role() {
        assert_eq!(Role::from(MessageRole::User), Role::User);
        assert_eq!(Role::from(MessageRole::Assistant), Role::Assistant);
    }

    #[test]
    fn test_message_constructors() {
        let msg = Message::system("You are a soil expert.");
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.content, "You are a soil expert.");

        let msg = Message::user("What is pH?");
        assert_eq!(msg.role, Role::User);
    }

    #[test]
    fn test_completion_request_serialize() {
        let request = CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![Message::user("hello")],
            max_tokens: 512,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-4o-mini\""));
        assert!(json.contains("\"max_tokens\":512"));
    }
}
