//! Authentication: credential storage, password hashing, session tokens.

pub mod password;
pub mod repository;
pub mod service;
pub mod token;
