//! Claude-specific request and response types
//!
//! These types map directly to the Anthropic Messages API schema.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// Model identifier
    pub model: String,
    /// Maximum number of tokens to generate (required)
    pub max_tokens: u32,
    /// Array of messages in the conversation
    pub messages: Vec<ClaudeMessage>,
    /// System prompt (top-level field)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Temperature (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Always true; responses are read as SSE
    pub stream: bool,
}

/// A single message in the Claude conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessage {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Plain-text content
    pub content: String,
}

/// SSE event types from the Claude streaming API
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeStreamEvent {
    /// Message streaming started
    MessageStart { message: ClaudeMessageData },
    /// Content block started
    ContentBlockStart {
        index: usize,
        content_block: ClaudeContentBlockStart,
    },
    /// Content block delta (incremental update)
    ContentBlockDelta {
        index: usize,
        delta: ClaudeContentDelta,
    },
    /// Content block stopped
    ContentBlockStop { index: usize },
    /// Message delta (metadata update)
    MessageDelta {
        delta: ClaudeMessageDeltaData,
        usage: Option<ClaudeUsage>,
    },
    /// Message streaming stopped
    MessageStop,
    /// Ping event (keep-alive)
    Ping,
    /// Error event
    Error { error: ClaudeErrorData },
}

/// Message data from message_start event
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeMessageData {
    /// Message ID
    pub id: String,
    /// Message role (always "assistant" for responses)
    pub role: String,
    /// Model identifier
    #[serde(default)]
    pub model: String,
    /// Initial usage metadata
    pub usage: ClaudeUsage,
}

/// Content block start data
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeContentBlockStart {
    /// Text block starting
    Text { text: String },
    /// Thinking, tool use and future block kinds
    #[serde(other)]
    Other,
}

/// Content delta (incremental update)
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeContentDelta {
    /// Text delta
    TextDelta { text: String },
    /// Deltas for non-text blocks
    #[serde(other)]
    Other,
}

/// Message delta data
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeMessageDeltaData {
    /// Stop reason (set when message completes)
    pub stop_reason: Option<String>,
    /// Stop sequence that triggered stop (if any)
    pub stop_sequence: Option<String>,
}

/// Usage metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeUsage {
    /// Input tokens consumed (not present in message_delta updates)
    #[serde(default)]
    pub input_tokens: u32,
    /// Output tokens generated
    pub output_tokens: u32,
}

/// Error data, both in-stream and in non-2xx bodies
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeErrorData {
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub message: String,
}

/// Body of a non-2xx response: `{"type":"error","error":{...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeErrorResponse {
    pub error: ClaudeErrorData,
}
