//! LlmProvider trait definition.

use soilcare_types::error::LlmError;
use soilcare_types::llm::{CompletionRequest, CompletionResponse};

/// Trait for LLM completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in soilcare-infra (e.g., `OpenAiProvider`).
/// One blocking call per request: no streaming, no retries.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
