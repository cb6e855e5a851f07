//! Business logic and repository trait definitions for SoilCare.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements. It depends only on `soilcare-types` --
//! never on `soilcare-infra` or any database/IO crate.

pub mod agent;
pub mod auth;
pub mod chat;
pub mod llm;
pub mod storage;
