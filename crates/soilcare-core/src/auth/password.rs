//! PasswordHasher trait definition.
//!
//! The trait is sync: hashing is pure CPU work with no I/O. Follows the
//! same port/adapter split as the repository traits -- the Argon2id
//! implementation lives in soilcare-infra.

use soilcare_types::error::AuthError;

/// Salted, slow password hashing with constant-time verification.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing PHC string
    /// (algorithm, parameters, and salt embedded in the output).
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch. `Err` means the stored hash itself
    /// could not be parsed, which is an internal fault, not a wrong
    /// password.
    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AuthError>;
}
