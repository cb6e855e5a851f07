//! Prompt window construction for the soil assistant.
//!
//! Builds the exact message sequence sent to the LLM provider: a system
//! instruction carrying the caller's soil report, a fixed-size window of
//! recent history, and the new question as the final user turn.

use serde_json::Value;

use soilcare_types::chat::ChatMessage;
use soilcare_types::llm::Message;

/// How many stored turns are carried into each prompt.
///
/// This is the complete context budget: no summarization, no token
/// counting. Older turns simply fall out of the window.
pub const WINDOW_SIZE: i64 = 5;

const SYSTEM_INSTRUCTION: &str = "You are SoilCare, an agronomy assistant. \
Answer the farmer's questions about soil health, crop choice, and \
fertilization using the soil report below. Be concise and practical.";

/// Assemble the prompt for one agent turn.
///
/// `history` is the stored window ordered newest-first, as
/// [`ChatRepository::recent_messages`](crate::chat::repository::ChatRepository::recent_messages)
/// returns it; it is reversed here so the provider sees the conversation
/// in chronological order. `soil_data` is embedded in the system
/// instruction verbatim via its JSON serialization.
pub fn build_window(history: &[ChatMessage], soil_data: &Value, question: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(format!(
        "{SYSTEM_INSTRUCTION}\n\nSoil report: {soil_data}"
    )));
    for turn in history.iter().rev() {
        messages.push(Message {
            role: turn.role.into(),
            content: turn.text.clone(),
        });
    }
    messages.push(Message::user(question));
    messages
}
