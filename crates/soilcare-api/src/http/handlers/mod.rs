//! HTTP request handlers.

pub mod agent;
pub mod auth;
pub mod chat;
pub mod upload;
