//! Shared domain types for SoilCare.
//!
//! This crate contains the core domain types used across the SoilCare
//! backend: User, ChatMessage, LLM request/response shapes, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod error;
pub mod llm;
pub mod user;
