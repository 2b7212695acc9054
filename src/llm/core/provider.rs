//! Provider trait for LLM implementations

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::Stream;
use futures::StreamExt;

use super::{
    error::LlmError,
    types::{
        ContentBlockStart, ContentDelta, GenerateRequest, GenerateResponse, Model, StreamEvent,
        UsageMetadata,
    },
};
use crate::llm::claude::ClaudeClient;

/// Stream of incremental generation events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send>>;

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Stream generate content from the LLM
    ///
    /// This method sends a request to the LLM and returns a stream of events
    /// representing the incremental response.
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError>;

    /// Generate content and wait for the first text block to complete
    ///
    /// Issues exactly one upstream call. Text from any later content block is
    /// ignored.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let stream = self.stream_generate(request).await?;
        collect_first_text(stream).await
    }
}

/// Drain an event stream, keeping the text of the first text content block
///
/// # Errors
///
/// Returns the first stream error, an in-band `Error` event as
/// [`LlmError::ProviderError`], or [`LlmError::EmptyResponse`] when the
/// stream carried no text block at all.
pub async fn collect_first_text(mut stream: EventStream) -> Result<GenerateResponse, LlmError> {
    let mut text_index: Option<usize> = None;
    let mut text = String::new();
    let mut finish_reason = None;
    let mut usage = UsageMetadata::default();

    while let Some(event) = stream.next().await {
        match event? {
            StreamEvent::MessageStart { message } => {
                if let Some(initial) = message.usage {
                    usage = initial;
                }
            }
            StreamEvent::ContentBlockStart {
                index,
                block: ContentBlockStart::Text { text: initial },
            } if text_index.is_none() => {
                text_index = Some(index);
                text.push_str(&initial);
            }
            StreamEvent::ContentDelta {
                index,
                delta: ContentDelta::TextDelta { text: chunk },
            } if text_index == Some(index) => {
                text.push_str(&chunk);
            }
            StreamEvent::MessageDelta {
                usage: Some(update),
            } => {
                usage = update;
            }
            StreamEvent::MessageEnd {
                finish_reason: reason,
                usage: final_usage,
            } => {
                finish_reason = Some(reason);
                usage = final_usage;
                break;
            }
            StreamEvent::Error { code, message } => {
                return Err(LlmError::ProviderError { code, message });
            }
            _ => {}
        }
    }

    if text_index.is_none() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(GenerateResponse {
        text,
        finish_reason,
        usage,
    })
}

/// Connection settings shared by every provider client
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Provider API key
    pub api_key: String,
    /// Base URL of the provider API, without a trailing path
    pub base_url: String,
    /// Upper bound on a single upstream call, connect through last byte
    pub timeout: Duration,
}

/// Create an LLM provider from a model specification
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn create_provider(
    model: Model,
    settings: ProviderSettings,
) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match model {
        Model::Claude(claude_model) => {
            let client = ClaudeClient::new(settings, claude_model)?;
            Ok(Arc::new(client))
        }
    }
}
