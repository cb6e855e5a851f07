//! Registration and sign-in handlers.
//!
//! Missing body fields are folded to empty strings and rejected by the
//! auth service's own validation, so a half-formed sign-up body gets the
//! same 409 as a well-formed one with a bad email.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignUpRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    userid: Uuid,
}

/// POST /sign-up - Register a new account.
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<Json<SignUpResponse>, ApiError> {
    let name = body.name.unwrap_or_default();
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let userid = state
        .auth_service
        .sign_up(&name, &email, &password)
        .await
        .map_err(ApiError::SignUp)?;

    Ok(Json(SignUpResponse { userid }))
}

#[derive(Deserialize)]
pub struct SignInRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
pub struct SignInResponse {
    message: String,
    token: String,
}

/// POST /sign-in - Exchange credentials for a session token.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, ApiError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let token = state
        .auth_service
        .sign_in(&email, &password)
        .await
        .map_err(ApiError::SignIn)?;

    Ok(Json(SignInResponse {
        message: "Sign-in successful".to_string(),
        token,
    }))
}
