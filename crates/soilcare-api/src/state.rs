//! Application state wiring all services together.
//!
//! Services are generic over repository/hasher/provider traits, but AppState
//! pins them to the concrete infra implementations the server runs with.

use std::sync::Arc;

use secrecy::SecretString;
use soilcare_core::agent::AgentService;
use soilcare_core::auth::service::AuthService;
use soilcare_core::chat::service::ChatService;
use soilcare_core::storage::ImageService;
use soilcare_infra::crypto::password::Argon2PasswordHasher;
use soilcare_infra::crypto::token::JwtTokenCodec;
use soilcare_infra::llm::openai::OpenAiProvider;
use soilcare_infra::media::HttpImageStore;
use soilcare_infra::sqlite::chat::SqliteChatRepository;
use soilcare_infra::sqlite::pool::{resolve_data_dir, DatabasePool};
use soilcare_infra::sqlite::user::SqliteUserRepository;

use crate::config::Config;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAuthService =
    AuthService<SqliteUserRepository, Argon2PasswordHasher, JwtTokenCodec>;

pub type ConcreteChatService = ChatService<SqliteChatRepository>;

pub type ConcreteAgentService = AgentService<SqliteChatRepository, OpenAiProvider>;

pub type ConcreteImageService = ImageService<SqliteChatRepository, HttpImageStore>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub agent_service: Arc<ConcreteAgentService>,
    pub image_service: Arc<ConcreteImageService>,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init(config: &Config) -> anyhow::Result<Self> {
        let db_url = match &config.database_url {
            Some(url) => url.clone(),
            None => {
                let data_dir = resolve_data_dir();

                // Ensure data directory exists
                tokio::fs::create_dir_all(&data_dir).await?;

                format!(
                    "sqlite://{}?mode=rwc",
                    data_dir.join("soilcare.db").display()
                )
            }
        };
        let db_pool = DatabasePool::new(&db_url).await?;

        // Wire auth service
        let auth_service = AuthService::new(
            SqliteUserRepository::new(db_pool.clone()),
            Argon2PasswordHasher::new(),
            JwtTokenCodec::new(config.jwt_secret.as_bytes()),
        );

        // Wire the agent on the chat-completion provider
        let mut provider = OpenAiProvider::new(SecretString::from(config.openai_api_key.clone()));
        if let Some(base_url) = &config.openai_base_url {
            provider = provider.with_base_url(base_url.clone());
        }
        let agent_service = AgentService::new(
            SqliteChatRepository::new(db_pool.clone()),
            provider,
            config.model.clone(),
            config.answer_max_tokens,
        );

        // Wire chat history
        let chat_service = ChatService::new(SqliteChatRepository::new(db_pool.clone()));

        // Wire image ingestion on the external host
        let store = HttpImageStore::new(
            SecretString::from(config.upload_api_key.clone()),
            config.upload_url.clone(),
        );
        let image_service = ImageService::new(SqliteChatRepository::new(db_pool.clone()), store);

        Ok(Self {
            auth_service: Arc::new(auth_service),
            chat_service: Arc::new(chat_service),
            agent_service: Arc::new(agent_service),
            image_service: Arc::new(image_service),
        })
    }
}
