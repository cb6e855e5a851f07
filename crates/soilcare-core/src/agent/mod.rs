//! The soil agent: one question in, one answer out, both persisted.

pub mod service;

pub use service::{AgentService, NO_ANSWER_FALLBACK};
