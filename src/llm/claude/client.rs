//! Claude client implementation

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::llm::core::{
    error::LlmError,
    provider::{EventStream, LlmProvider, ProviderSettings},
    types::{GenerateRequest, StreamEvent, UsageMetadata},
};

use super::mapper::{from_claude_event, to_claude_request};
use super::sse::parse_sse_stream;
use super::types::ClaudeErrorResponse;

/// Messages API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default public endpoint of the Anthropic API
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Claude model identifiers for the Messages API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClaudeModel {
    /// Claude 3.5 Haiku (2024-10-22)
    #[default]
    Haiku35,
    /// Claude Sonnet 4.5 (2025-09-29)
    Sonnet45,
    /// Claude Haiku 4.5 (2025-10-01)
    Haiku45,
    /// Any other model id, passed through untouched
    Custom(String),
}

impl ClaudeModel {
    /// Get the model identifier string for the Messages API
    pub fn as_str(&self) -> &str {
        match self {
            ClaudeModel::Haiku35 => "claude-3-5-haiku-20241022",
            ClaudeModel::Sonnet45 => "claude-sonnet-4-5-20250929",
            ClaudeModel::Haiku45 => "claude-haiku-4-5-20251001",
            ClaudeModel::Custom(id) => id.as_str(),
        }
    }
}

impl FromStr for ClaudeModel {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            return Err(LlmError::InvalidRequest("model id is empty".to_string()));
        }
        Ok(match id {
            "claude-3-5-haiku-20241022" => ClaudeModel::Haiku35,
            "claude-sonnet-4-5-20250929" => ClaudeModel::Sonnet45,
            "claude-haiku-4-5-20251001" => ClaudeModel::Haiku45,
            other => ClaudeModel::Custom(other.to_string()),
        })
    }
}

/// Client for the Anthropic Messages API
pub struct ClaudeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent as `x-api-key`
    api_key: String,
    /// API origin, e.g. `https://api.anthropic.com`
    base_url: String,
    /// Model to use
    model: ClaudeModel,
}

impl ClaudeClient {
    /// Create a new Claude client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or the HTTP client cannot be
    /// built.
    pub fn new(settings: ProviderSettings, model: ClaudeModel) -> Result<Self, LlmError> {
        if settings.api_key.trim().is_empty() {
            return Err(LlmError::AuthenticationError(
                "ANTHROPIC_API_KEY is empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(settings.timeout)
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key: settings.api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Build the endpoint URL for the Messages API
    fn build_endpoint_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Make a streaming request to Claude
    async fn make_streaming_request(
        &self,
        request: GenerateRequest,
    ) -> Result<EventStream, LlmError> {
        let claude_request = to_claude_request(self.model.as_str(), request);
        let url = self.build_endpoint_url();

        debug!(
            model = self.model.as_str(),
            messages = claude_request.messages.len(),
            "sending messages request"
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&claude_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, retry_after, &body));
        }

        let byte_stream = response.bytes_stream();
        let sse_stream = parse_sse_stream(Box::pin(byte_stream));

        let mut accumulated_usage = UsageMetadata::default();

        let event_stream = sse_stream.flat_map(move |result| match result {
            Ok(claude_event) => {
                let events = from_claude_event(claude_event, &mut accumulated_usage);
                futures::stream::iter(
                    events
                        .into_iter()
                        .map(Ok)
                        .collect::<Vec<Result<StreamEvent, LlmError>>>(),
                )
            }
            Err(e) => futures::stream::iter(vec![Err(e)]),
        });

        Ok(Box::pin(event_stream))
    }
}

#[async_trait]
impl LlmProvider for ClaudeClient {
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError> {
        self.make_streaming_request(request).await
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Map a non-2xx Messages API response to an [`LlmError`]
pub fn error_from_status(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: &str,
) -> LlmError {
    let envelope = serde_json::from_str::<ClaudeErrorResponse>(body).ok();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let message = match envelope {
            Some(envelope) => envelope.error.message,
            None if !body.trim().is_empty() => body.trim().to_string(),
            None => "too many requests".to_string(),
        };
        return LlmError::RateLimitExceeded {
            message,
            retry_after,
        };
    }

    let Some(envelope) = envelope else {
        return LlmError::HttpError {
            status: status.as_u16(),
            body: body.to_string(),
        };
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LlmError::AuthenticationError(envelope.error.message)
        }
        _ => LlmError::ProviderError {
            code: envelope.error.error_type,
            message: envelope.error.message,
        },
    }
}
