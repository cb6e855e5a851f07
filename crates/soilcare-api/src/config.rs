//! Server configuration for the `soilcare` binary.
//!
//! Everything is settable as a flag or an environment variable. Secrets
//! (the JWT signing secret and the upstream API keys) arrive as plain
//! strings here and are wrapped in `SecretString` when the services are
//! wired up in [`crate::state::AppState::init`].

use clap::Parser;

/// SoilCare REST API server.
// No Debug derive: several fields hold secrets.
#[derive(Parser)]
#[command(name = "soilcare", version, about, long_about = None)]
pub struct Config {
    /// Port to listen on.
    #[arg(short, long, env = "SOILCARE_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to.
    #[arg(long, env = "SOILCARE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// SQLite database URL. Defaults to a file under the data
    /// directory (`SOILCARE_DATA_DIR`, or `~/.soilcare`).
    #[arg(long, env = "SOILCARE_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Secret used to sign and verify session tokens.
    #[arg(long, env = "SOILCARE_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// API key for the chat-completion provider.
    #[arg(long, env = "SOILCARE_OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Base URL of the chat-completion provider, for proxies or
    /// compatible services.
    #[arg(long, env = "SOILCARE_OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// Model requested for every agent completion.
    #[arg(long, env = "SOILCARE_OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Upper bound on tokens generated per answer.
    #[arg(long, env = "SOILCARE_ANSWER_MAX_TOKENS", default_value = "512")]
    pub answer_max_tokens: u32,

    /// Upload endpoint of the image host.
    #[arg(long, env = "SOILCARE_UPLOAD_URL")]
    pub upload_url: String,

    /// API key for the image host.
    #[arg(long, env = "SOILCARE_UPLOAD_API_KEY", hide_env_values = true)]
    pub upload_api_key: String,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
