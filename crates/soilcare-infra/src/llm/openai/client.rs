//! OpenAiProvider -- concrete [`LlmProvider`] implementation for OpenAI.
//!
//! Sends requests to the Chat Completions API (`/v1/chat/completions`)
//! with bearer authentication. Non-streaming only: the agent waits for
//! the full answer before persisting it.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use soilcare_core::llm::provider::LlmProvider;
use soilcare_types::error::LlmError;
use soilcare_types::llm::{CompletionRequest, CompletionResponse};

use super::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse};

/// OpenAI Chat Completions provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the authorization header. It never appears in Debug
/// output, Display output, or tracing logs.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long generations
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into an [`OpenAiRequest`].
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAiRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| OpenAiMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        OpenAiRequest {
            model: request.model.clone(),
            messages,
            max_tokens: request.max_tokens,
        }
    }
}

// OpenAiProvider intentionally does NOT derive Debug to prevent
// accidental exposure of internal state. The SecretString field ensures
// the API key is never printed, but we also omit Debug entirely.

impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_openai_request(request);
        let url = self.url("/v1/chat/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_body, "OpenAI API error response");
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let openai_resp: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        // First choice's text; empty when the API returned no usable
        // content. The agent substitutes its fallback for empty answers.
        let content = openai_resp
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or_default()
            .to_string();

        Ok(CompletionResponse {
            content,
            model: openai_resp.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilcare_types::llm::Message;

    fn make_provider() -> OpenAiProvider {
        OpenAiProvider::new(SecretString::from("test-key-not-real"))
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(make_provider().name(), "openai");
    }

    #[test]
    fn test_to_openai_request_maps_roles() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message::system("Be helpful"),
                Message::user("Hello"),
                Message::assistant("Hi!"),
            ],
            max_tokens: 512,
        };

        let openai_req = provider.to_openai_request(&request);
        assert_eq!(openai_req.model, "gpt-4o-mini");
        assert_eq!(openai_req.max_tokens, 512);
        assert_eq!(openai_req.messages.len(), 3);
        assert_eq!(openai_req.messages[0].role, "system");
        assert_eq!(openai_req.messages[1].role, "user");
        assert_eq!(openai_req.messages[2].role, "assistant");
    }

    #[test]
    fn test_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url("/v1/chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
    }
}
