//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` port from `soilcare-core` using the
//! PHC string format: the salt and work-factor parameters travel inside
//! the stored hash, so verification needs no extra state.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use soilcare_types::error::AuthError;

/// Argon2id hasher with the crate's default parameters
/// (19 MiB memory, 2 iterations, 1 lane -- the OWASP recommendation).
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl soilcare_core::auth::password::PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hash(e.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Hash(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilcare_core::auth::password::PasswordHasher;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("pw123456").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("pw123456", &hash).unwrap());
        assert!(!hasher.verify("pw1234567", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2PasswordHasher::new();
        let a = hasher.hash("pw123456").unwrap();
        let b = hasher.hash("pw123456").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_error_not_mismatch() {
        let hasher = Argon2PasswordHasher::new();
        let err = hasher.verify("pw123456", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::Hash(_)));
    }
}
