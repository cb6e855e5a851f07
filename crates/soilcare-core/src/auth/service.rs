//! Auth service: sign-up, sign-in, and token verification.
//!
//! Generic over [`UserRepository`], [`PasswordHasher`], and [`TokenCodec`]
//! so the service can be exercised with in-memory fakes while the real
//! wiring uses SQLite + Argon2id + JWT from soilcare-infra.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use soilcare_types::error::{AuthError, RepositoryError, TokenError};
use soilcare_types::user::User;

use crate::auth::password::PasswordHasher;
use crate::auth::repository::UserRepository;
use crate::auth::token::TokenCodec;

/// Maximum accepted display-name length (in characters).
const MAX_NAME_LEN: usize = 100;

/// Minimum accepted password length (in bytes).
const MIN_PASSWORD_LEN: usize = 8;

/// Sign-up, sign-in, and session token verification.
pub struct AuthService<U: UserRepository, H: PasswordHasher, T: TokenCodec> {
    users: U,
    hasher: H,
    tokens: T,
}

impl<U: UserRepository, H: PasswordHasher, T: TokenCodec> AuthService<U, H, T> {
    pub fn new(users: U, hasher: H, tokens: T) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new user, returning its id.
    ///
    /// Validates email shape, name length (1-100), and password length
    /// (>= 8) before touching the store. A duplicate email surfaces as
    /// [`AuthError::EmailTaken`] with no second row written.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Uuid, AuthError> {
        let name = name.trim();
        let email = email.trim();

        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(AuthError::InvalidName);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = User {
            id: Uuid::now_v7(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.users.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::EmailTaken(user.email.clone()),
            other => AuthError::Storage(other.to_string()),
        })?;

        info!(user_id = %created.id, "user registered");
        Ok(created.id)
    }

    /// Verify credentials and issue a session token.
    ///
    /// An unknown email and a wrong password both fail with
    /// [`AuthError::InvalidCredentials`]; the caller cannot tell which half
    /// of the pair was wrong. Read-only: no session state is written.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .users
            .find_by_email(email.trim())
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id)
            .map_err(|e| AuthError::Token(e.to_string()))?;

        info!(user_id = %user.id, "user signed in");
        Ok(token)
    }

    /// Verify a session token, returning the embedded user id.
    pub fn verify_token(&self, token: &str) -> Result<Uuid, TokenError> {
        self.tokens.verify(token)
    }
}

/// Structural email check: non-empty local part, one `@`, domain with an
/// interior dot, no whitespace. Deliverability is not our problem.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}
