//! Session token authentication extractor.
//!
//! The `Authorization` header value is the signed token itself, with no
//! `Bearer` scheme prefix. Extracting [`AuthUser`] verifies the token and
//! yields the user id it was issued for, so handlers receive the caller's
//! identity as a plain argument instead of digging it out of request
//! extensions.
//!
//! A missing header rejects with 401; a header that is present but
//! malformed, tampered with, or expired rejects with 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use soilcare_types::error::TokenError;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Authenticated request identity. Extracting this validates the token.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get("authorization") else {
            return Err(ApiError::Unauthorized("no token provided".to_string()));
        };

        let token = header
            .to_str()
            .map_err(|_| ApiError::Forbidden("invalid token".to_string()))?;

        match state.auth_service.verify_token(token.trim()) {
            Ok(user_id) => Ok(AuthUser(user_id)),
            Err(TokenError::Expired) => Err(ApiError::Forbidden("token expired".to_string())),
            Err(_) => Err(ApiError::Forbidden("invalid token".to_string())),
        }
    }
}
