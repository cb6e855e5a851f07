//! Application error type mapping to HTTP status codes and response bodies.
//!
//! Every error body has the shape `{"message": "..."}`. Auth failures map
//! differently per endpoint (registration conflicts are 409, sign-in
//! failures collapse to a single 404), so the auth error is wrapped in a
//! per-endpoint variant instead of a blanket `From`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use soilcare_types::error::{AgentError, AuthError, RepositoryError, UploadError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Registration failure. Validation and duplicate-email both conflict.
    SignUp(AuthError),
    /// Sign-in failure. Bad email and bad password are indistinguishable.
    SignIn(AuthError),
    /// Agent turn failure.
    Agent(AgentError),
    /// Image upload failure.
    Upload(UploadError),
    /// Chat history read failure.
    History(RepositoryError),
    /// No token on a protected route.
    Unauthorized(String),
    /// Token present but rejected.
    Forbidden(String),
    /// Malformed request.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<AgentError> for ApiError {
    fn from(e: AgentError) -> Self {
        ApiError::Agent(e)
    }
}

impl From<UploadError> for ApiError {
    fn from(e: UploadError) -> Self {
        ApiError::Upload(e)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::History(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::SignUp(
                e @ (AuthError::EmailTaken(_)
                | AuthError::InvalidName
                | AuthError::InvalidEmail
                | AuthError::PasswordTooShort),
            ) => (StatusCode::CONFLICT, e.to_string()),
            ApiError::SignUp(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::SignIn(AuthError::InvalidCredentials) => {
                (StatusCode::NOT_FOUND, "invalid email or password".to_string())
            }
            ApiError::SignIn(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Agent(AgentError::EmptyQuestion) => {
                (StatusCode::BAD_REQUEST, "question must not be empty".to_string())
            }
            ApiError::Agent(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Upload(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::History(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to load chats: {e}"),
            ),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
