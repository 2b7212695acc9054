//! Claude provider implementation
//!
//! This module provides a client for the Anthropic Messages API, reading
//! every response as a server-sent event stream.

pub mod client;
pub mod mapper;
pub mod sse;
pub mod types;

// Re-export commonly used types
pub use client::{ClaudeClient, ClaudeModel, ANTHROPIC_VERSION, DEFAULT_BASE_URL};
