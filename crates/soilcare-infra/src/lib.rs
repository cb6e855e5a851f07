//! Infrastructure layer for SoilCare.
//!
//! Contains implementations of the ports defined in `soilcare-core`:
//! SQLite storage, password hashing (Argon2id), session tokens (JWT),
//! the OpenAI completion client, and the image host client.

pub mod crypto;
pub mod llm;
pub mod media;
pub mod sqlite;
