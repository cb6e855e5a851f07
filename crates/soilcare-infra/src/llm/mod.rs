//! LLM provider implementations.
//!
//! Contains the concrete implementation of the [`LlmProvider`] trait
//! defined in `soilcare-core`.
//!
//! [`LlmProvider`]: soilcare_core::llm::provider::LlmProvider

pub mod openai;
