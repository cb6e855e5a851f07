//! Agent service orchestrating one question/answer turn.
//!
//! The sequence per request is strictly: fetch recent history, build the
//! prompt window, call the provider, persist question and answer as one
//! atomic append. No retries, no background work.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use soilcare_types::chat::{ChatMessage, MessageRole};
use soilcare_types::error::AgentError;
use soilcare_types::llm::CompletionRequest;

use crate::chat::context::{WINDOW_SIZE, build_window};
use crate::chat::repository::ChatRepository;
use crate::llm::provider::LlmProvider;

/// Returned verbatim when the provider answers with no content.
pub const NO_ANSWER_FALLBACK: &str = "No answer generated.";

/// Answers soil questions with a fixed model and output cap.
pub struct AgentService<C: ChatRepository, L: LlmProvider> {
    repo: C,
    provider: L,
    model: String,
    max_tokens: u32,
}

impl<C: ChatRepository, L: LlmProvider> AgentService<C, L> {
    pub fn new(repo: C, provider: L, model: String, max_tokens: u32) -> Self {
        Self {
            repo,
            provider,
            model,
            max_tokens,
        }
    }

    /// Answer `question` in the context of the user's soil report and
    /// recent history, then persist the exchange.
    ///
    /// The question and answer rows are appended atomically: history can
    /// never hold a question without its answer. A blank question is
    /// rejected before any lookup occurs.
    pub async fn ask(
        &self,
        user_id: Uuid,
        question: &str,
        soil_data: &Value,
    ) -> Result<String, AgentError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AgentError::EmptyQuestion);
        }

        let history = self
            .repo
            .recent_messages(&user_id, WINDOW_SIZE)
            .await
            .map_err(|e| AgentError::Storage(e.to_string()))?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: build_window(&history, soil_data, question),
            max_tokens: self.max_tokens,
        };

        let response = self
            .provider
            .complete(&request)
            .await
            .map_err(|e| AgentError::Assistant(e.to_string()))?;

        let answer = if response.content.is_empty() {
            NO_ANSWER_FALLBACK.to_string()
        } else {
            response.content
        };

        let question_row = ChatMessage::new(user_id, MessageRole::User, question);
        let answer_row = ChatMessage::new(user_id, MessageRole::Assistant, answer.clone());
        self.repo
            .append_exchange(&question_row, &answer_row)
            .await
            .map_err(|e| AgentError::Storage(e.to_string()))?;

        info!(
            user_id = %user_id,
            provider = self.provider.name(),
            answer_chars = answer.len(),
            "agent turn completed"
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;
    use soilcare_types::error::{LlmError, RepositoryError};
    use soilcare_types::llm::{CompletionResponse, Role};

    /// Seeded history plus a record of appended exchanges.
    struct MockChatRepository {
        seeded: Vec<ChatMessage>,
        lookups: AtomicUsize,
        appended: Mutex<Vec<(ChatMessage, ChatMessage)>>,
    }

    impl MockChatRepository {
        fn with_turns(count: usize) -> Self {
            let user_id = Uuid::now_v7();
            let seeded = (0..count)
                .map(|i| {
                    let role = if i % 2 == 0 {
                        MessageRole::User
                    } else {
                        MessageRole::Assistant
                    };
                    ChatMessage::new(user_id, role, format!("turn {i}"))
                })
                .collect();
            Self {
                seeded,
                lookups: AtomicUsize::new(0),
                appended: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChatRepository for MockChatRepository {
        async fn save_message(&self, message: &ChatMessage) -> Result<ChatMessage, RepositoryError> {
            Ok(message.clone())
        }

        async fn recent_messages(
            &self,
            _user_id: &Uuid,
            limit: i64,
        ) -> Result<Vec<ChatMessage>, RepositoryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            // Newest first, capped at `limit`, like the SQLite query.
            Ok(self
                .seeded
                .iter()
                .rev()
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn list_messages(&self, _user_id: &Uuid) -> Result<Vec<ChatMessage>, RepositoryError> {
            Ok(self.seeded.clone())
        }

        async fn append_exchange(
            &self,
            question: &ChatMessage,
            answer: &ChatMessage,
        ) -> Result<(), RepositoryError> {
            self.appended
                .lock()
                .unwrap()
                .push((question.clone(), answer.clone()));
            Ok(())
        }
    }

    /// Provider that captures the request and returns a canned answer.
    struct MockProvider {
        content: String,
        fail: bool,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl MockProvider {
        fn answering(content: &str) -> Self {
            Self {
                content: content.to_string(),
                fail: false,
                last_request: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                content: String::new(),
                fail: true,
                last_request: Mutex::new(None),
            }
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            if self.fail {
                return Err(LlmError::Provider {
                    message: "upstream down".to_string(),
                });
            }
            Ok(CompletionResponse {
                content: self.content.clone(),
                model: request.model.clone(),
            })
        }
    }

    fn make_service(
        repo: MockChatRepository,
        provider: MockProvider,
    ) -> AgentService<MockChatRepository, MockProvider> {
        AgentService::new(repo, provider, "gpt-4o-mini".to_string(), 512)
    }

    #[tokio::test]
    async fn test_ask_builds_window_and_returns_answer() {
        let service = make_service(
            MockChatRepository::with_turns(3),
            MockProvider::answering("Lime raises pH."),
        );

        let answer = service
            .ask(Uuid::now_v7(), "What is pH?", &json!({"ph": 5.2}))
            .await
            .unwrap();
        assert_eq!(answer, "Lime raises pH.");

        let request = service.provider.last_request.lock().unwrap().take().unwrap();
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, 512);
        // system + 3 historical + question
        assert_eq!(request.messages.len(), 5);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.contains("\"ph\":5.2"));
        assert_eq!(request.messages[4].content, "What is pH?");
        // History arrives in chronological order.
        assert_eq!(request.messages[1].content, "turn 0");
        assert_eq!(request.messages[3].content, "turn 2");
    }

    #[tokio::test]
    async fn test_history_window_capped_at_five() {
        let service = make_service(
            MockChatRepository::with_turns(7),
            MockProvider::answering("ok"),
        );

        service
            .ask(Uuid::now_v7(), "next", &json!({}))
            .await
            .unwrap();

        let request = service.provider.last_request.lock().unwrap().take().unwrap();
        // system + 5 historical (turns 2..=6) + question
        assert_eq!(request.messages.len(), 7);
        assert_eq!(request.messages[1].content, "turn 2");
        assert_eq!(request.messages[5].content, "turn 6");
    }

    #[tokio::test]
    async fn test_blank_question_fails_before_lookup() {
        let service = make_service(
            MockChatRepository::with_turns(0),
            MockProvider::answering("never"),
        );

        let err = service
            .ask(Uuid::now_v7(), "   ", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::EmptyQuestion));
        assert_eq!(service.repo.lookups.load(Ordering::SeqCst), 0);
        assert!(service.provider.last_request.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_completion_uses_fallback() {
        let service = make_service(
            MockChatRepository::with_turns(0),
            MockProvider::answering(""),
        );

        let answer = service
            .ask(Uuid::now_v7(), "anyone there?", &json!({}))
            .await
            .unwrap();
        assert_eq!(answer, NO_ANSWER_FALLBACK);

        // The fallback is what gets persisted, too.
        let appended = service.repo.appended.lock().unwrap();
        assert_eq!(appended[0].1.text, NO_ANSWER_FALLBACK);
    }

    #[tokio::test]
    async fn test_exchange_persisted_question_before_answer() {
        let user_id = Uuid::now_v7();
        let service = make_service(
            MockChatRepository::with_turns(0),
            MockProvider::answering("plant clover"),
        );

        service
            .ask(user_id, "cover crop?", &json!({}))
            .await
            .unwrap();

        let appended = service.repo.appended.lock().unwrap();
        assert_eq!(appended.len(), 1);
        let (question, answer) = &appended[0];
        assert_eq!(question.user_id, user_id);
        assert_eq!(question.role, MessageRole::User);
        assert_eq!(question.text, "cover crop?");
        assert_eq!(answer.role, MessageRole::Assistant);
        assert_eq!(answer.text, "plant clover");
        assert!(question.created_at <= answer.created_at);
    }

    #[tokio::test]
    async fn test_provider_failure_persists_nothing() {
        let service = make_service(MockChatRepository::with_turns(2), MockProvider::failing());

        let err = service
            .ask(Uuid::now_v7(), "hello?", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::Assistant(_)));
        assert!(service.repo.appended.lock().unwrap().is_empty());
    }
}
