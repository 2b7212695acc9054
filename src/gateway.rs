//! Chat gateway: validation, persona resolution and the single upstream call
//!
//! Requests are independent. The gateway owns no mutable state, so a single
//! instance is shared across every request-handling task.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::GatewayError;
use crate::llm::{GenerateRequest, GenerationConfig, LlmProvider, Message, MessageRole};
use crate::models::{
    ChatMessage, ChatRequest, ChatResponse, ChatRole, HealthResponse, SummaryRequest,
    SummaryResponse, TherapistsResponse,
};
use crate::personas::{Persona, PersonaRegistry, DEFAULT_PERSONA_ID};

pub const HEALTH_STATUS: &str = "Server is running";
pub const INVALID_REQUEST_DATA: &str = "Invalid request data";
pub const INVALID_THERAPIST_ID: &str = "Invalid therapist ID";

pub struct Gateway {
    registry: PersonaRegistry,
    provider: Arc<dyn LlmProvider>,
    generation: GenerationConfig,
}

impl Gateway {
    pub fn new(registry: PersonaRegistry, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            registry,
            provider,
            generation: GenerationConfig::default(),
        }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: HEALTH_STATUS.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn list_personas(&self) -> TherapistsResponse {
        TherapistsResponse {
            therapists: self.registry.list_all(),
        }
    }

    /// Reply as the requested persona
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, GatewayError> {
        let upstream = build_chat_request(&self.registry, &self.generation, &request)?;
        let persona = request.therapist_id.as_deref().unwrap_or(DEFAULT_PERSONA_ID);

        debug!(persona, turns = upstream.messages.len(), "forwarding chat");
        let generated = self.provider.generate(upstream).await?;
        info!(
            persona,
            output_tokens = generated.usage.output_tokens,
            "chat reply generated"
        );

        Ok(ChatResponse {
            response: generated.text,
        })
    }

    /// Summarize a conversation in the requested persona's voice
    pub async fn summarize(
        &self,
        request: SummaryRequest,
    ) -> Result<SummaryResponse, GatewayError> {
        let upstream = build_summary_request(&self.registry, &self.generation, &request)?;

        debug!(
            persona = request.therapist_id.as_str(),
            turns = upstream.messages.len(),
            "forwarding summary"
        );
        let generated = self.provider.generate(upstream).await?;
        info!(
            persona = request.therapist_id.as_str(),
            output_tokens = generated.usage.output_tokens,
            "summary generated"
        );

        Ok(SummaryResponse {
            summary: generated.text,
        })
    }
}

/// Build the upstream request for a chat turn without sending it
///
/// `system` history entries are dropped. The new message is appended as a
/// user turn unless the history already ends with that exact user turn.
pub fn build_chat_request(
    registry: &PersonaRegistry,
    generation: &GenerationConfig,
    request: &ChatRequest,
) -> Result<GenerateRequest, GatewayError> {
    if is_blank(&request.message) {
        return Err(GatewayError::invalid(INVALID_REQUEST_DATA));
    }
    let persona = resolve(
        registry,
        request.therapist_id.as_deref().unwrap_or(DEFAULT_PERSONA_ID),
    )?;

    let mut messages = Vec::with_capacity(request.history.len() + 1);
    for entry in &request.history {
        if is_blank(&entry.content) {
            return Err(GatewayError::invalid(INVALID_REQUEST_DATA));
        }
        if let Some(message) = to_upstream(entry) {
            messages.push(message);
        }
    }

    let already_sent = request.history.last().is_some_and(|last| {
        last.role == ChatRole::User && last.content == request.message
    });
    if !already_sent {
        messages.push(Message::user(request.message.as_str()));
    }

    Ok(GenerateRequest {
        messages,
        config: generation.clone(),
        system: Some(persona.system_prompt.clone()),
    })
}

/// Build the upstream request for a summary without sending it
pub fn build_summary_request(
    registry: &PersonaRegistry,
    generation: &GenerationConfig,
    request: &SummaryRequest,
) -> Result<GenerateRequest, GatewayError> {
    if request.messages.is_empty() {
        return Err(GatewayError::invalid(INVALID_REQUEST_DATA));
    }
    let persona = resolve(registry, &request.therapist_id)?;

    let messages = request
        .messages
        .iter()
        .map(|entry| {
            if is_blank(&entry.content) {
                return Err(GatewayError::invalid(INVALID_REQUEST_DATA));
            }
            to_upstream(entry).ok_or_else(|| {
                GatewayError::invalid("System messages cannot be summarized")
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerateRequest {
        messages,
        config: generation.clone(),
        system: Some(persona.summary_prompt.clone()),
    })
}

fn resolve<'a>(registry: &'a PersonaRegistry, id: &str) -> Result<&'a Persona, GatewayError> {
    registry
        .lookup(id)
        .ok_or_else(|| GatewayError::invalid(INVALID_THERAPIST_ID))
}

fn to_upstream(entry: &ChatMessage) -> Option<Message> {
    let role = match entry.role {
        ChatRole::User => MessageRole::User,
        ChatRole::Assistant => MessageRole::Assistant,
        ChatRole::System => return None,
    };
    Some(Message::text(role, entry.content.as_str()))
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
