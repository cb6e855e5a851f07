//! TokenCodec trait definition.

use soilcare_types::error::TokenError;
use uuid::Uuid;

/// Signing and verification of stateless session tokens.
///
/// A token embeds the user id and an expiry; the server keeps no session
/// state, so verification is a pure computation over the presented token.
/// Implementations live in soilcare-infra (e.g., `JwtTokenCodec`).
pub trait TokenCodec: Send + Sync {
    /// Issue a signed token embedding `user_id`.
    fn issue(&self, user_id: Uuid) -> Result<String, TokenError>;

    /// Verify a token's signature and expiry, returning the embedded
    /// user id.
    fn verify(&self, token: &str) -> Result<Uuid, TokenError>;
}
