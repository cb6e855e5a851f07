//! Cryptographic operations for SoilCare.
//!
//! - `password`: Argon2id password hashing and verification
//! - `token`: JWT session tokens (HS256, 30-day expiry)

pub mod password;
pub mod token;
