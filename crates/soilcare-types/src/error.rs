use thiserror::Error;

/// Errors from repository operations (used by trait definitions in soilcare-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors related to sign-up, sign-in, and credential handling.
///
/// `InvalidCredentials` covers both "no such email" and "wrong password"
/// so callers cannot tell which part of the pair was wrong.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("name must be between 1 and 100 characters")]
    InvalidName,

    #[error("password must be at least 8 characters")]
    PasswordTooShort,

    #[error("email '{0}' is already registered")]
    EmailTaken(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("token error: {0}")]
    Token(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from the assistant question flow.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("question must not be empty")]
    EmptyQuestion,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("assistant error: {0}")]
    Assistant(String),
}

/// Errors from the image upload flow.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("image host error: {0}")]
    Host(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from session token signing and verification.
///
/// Verification failures deliberately carry no detail about why the token
/// was rejected.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("token signing failed")]
    Signing,
}

/// Errors from LLM provider operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors from the external image host.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("upload failed: {0}")]
    Upload(String),

    #[error("malformed response from image host: {0}")]
    InvalidResponse(String),

    #[error("image host authentication failed")]
    AuthenticationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_auth_error_display() {
        let err = AuthError::EmailTaken("ana@example.com".to_string());
        assert_eq!(err.to_string(), "email 'ana@example.com' is already registered");
    }

    #[test]
    fn test_invalid_credentials_hides_cause() {
        // Same message regardless of which half of the pair was wrong.
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "invalid email or password");
        assert!(!err.to_string().contains("email not found"));
        assert!(!err.to_string().contains("password mismatch"));
    }

    #[test]
    fn test_token_error_display() {
        assert_eq!(TokenError::Expired.to_string(), "token expired");
        assert_eq!(TokenError::Invalid.to_string(), "invalid token");
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 500".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 500");
    }
}
