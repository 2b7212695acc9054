//! LLM Abstraction Layer
//!
//! This module provides a provider-neutral interface over the upstream
//! model API, with a client for Anthropic Claude.

pub mod claude;
pub mod core;

// Re-export commonly used types
pub use claude::{ClaudeClient, ClaudeModel};
pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::{collect_first_text, create_provider, EventStream, LlmProvider, ProviderSettings},
    types::{
        ContentBlock, ContentBlockStart, ContentDelta, FinishReason, GenerateRequest,
        GenerateResponse, Message, MessageRole, Model, StreamEvent, UsageMetadata,
    },
};
