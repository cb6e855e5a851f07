//! LLM provider abstraction for the soil assistant.
//!
//! Defines the `LlmProvider` trait; the concrete HTTP client lives in
//! soilcare-infra.

pub mod provider;
