//! HTTP/REST API layer for SoilCare.
//!
//! Axum-based REST API with token authentication on the agent, chat, and
//! upload routes, and CORS open for the web client.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
