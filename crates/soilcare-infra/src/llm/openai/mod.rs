//! OpenAI LLM provider implementation.
//!
//! This module provides the [`OpenAiProvider`] which implements the
//! [`LlmProvider`](soilcare_core::llm::provider::LlmProvider) trait for
//! the OpenAI Chat Completions API.

pub mod client;
pub mod types;

pub use client::OpenAiProvider;
