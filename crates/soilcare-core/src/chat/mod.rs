//! Chat history persistence abstractions and prompt window construction.
//!
//! This module defines the `ChatRepository` trait that the infrastructure
//! layer implements, the `ChatService` that handlers call for history
//! reads and image-message writes, and the prompt window builder used by
//! the agent.

pub mod context;
pub mod repository;
pub mod service;
