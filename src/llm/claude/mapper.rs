//! Mapping between abstraction types and Claude-specific types

use crate::llm::core::types::{
    ContentBlockStart, ContentDelta, FinishReason, GenerateRequest, Message, MessageMetadata,
    MessageRole, StreamEvent, UsageMetadata,
};

use super::types::{
    ClaudeContentBlockStart, ClaudeContentDelta, ClaudeMessage, ClaudeStreamEvent,
    MessagesRequest,
};

/// Convert our abstraction request to the Messages API request format
pub fn to_claude_request(model: &str, request: GenerateRequest) -> MessagesRequest {
    MessagesRequest {
        model: model.to_string(),
        max_tokens: request.config.max_tokens,
        messages: request
            .messages
            .into_iter()
            .map(to_claude_message)
            .collect(),
        system: request.system,
        temperature: request.config.temperature,
        stream: true,
    }
}

/// Convert our Message to Claude's ClaudeMessage
fn to_claude_message(message: Message) -> ClaudeMessage {
    let role = match message.role {
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    };

    ClaudeMessage {
        role: role.to_string(),
        content: message.text_content(),
    }
}

/// Convert Claude's stream event to our abstraction's StreamEvent
///
/// Keep-alives and `message_stop` produce nothing, so the result may be empty.
pub fn from_claude_event(
    event: ClaudeStreamEvent,
    accumulated_usage: &mut UsageMetadata,
) -> Vec<StreamEvent> {
    match event {
        ClaudeStreamEvent::MessageStart { message } => {
            *accumulated_usage =
                UsageMetadata::new(message.usage.input_tokens, message.usage.output_tokens);

            vec![StreamEvent::MessageStart {
                message: MessageMetadata {
                    id: message.id,
                    role: MessageRole::Assistant,
                    usage: Some(*accumulated_usage),
                },
            }]
        }
        ClaudeStreamEvent::ContentBlockStart {
            index,
            content_block,
        } => {
            let block = match content_block {
                ClaudeContentBlockStart::Text { text } => ContentBlockStart::Text { text },
                ClaudeContentBlockStart::Other => ContentBlockStart::Other,
            };

            vec![StreamEvent::ContentBlockStart { index, block }]
        }
        ClaudeStreamEvent::ContentBlockDelta { index, delta } => {
            let delta = match delta {
                ClaudeContentDelta::TextDelta { text } => ContentDelta::TextDelta { text },
                ClaudeContentDelta::Other => ContentDelta::Other,
            };

            vec![StreamEvent::ContentDelta { index, delta }]
        }
        ClaudeStreamEvent::ContentBlockStop { index } => {
            vec![StreamEvent::ContentBlockEnd { index }]
        }
        ClaudeStreamEvent::MessageDelta { delta, usage } => {
            if let Some(usage) = usage {
                *accumulated_usage =
                    UsageMetadata::new(accumulated_usage.input_tokens, usage.output_tokens);
            }

            match delta.stop_reason {
                Some(stop_reason) => vec![StreamEvent::MessageEnd {
                    finish_reason: FinishReason::from(stop_reason.as_str()),
                    usage: *accumulated_usage,
                }],
                None => vec![StreamEvent::MessageDelta {
                    usage: Some(*accumulated_usage),
                }],
            }
        }
        ClaudeStreamEvent::MessageStop | ClaudeStreamEvent::Ping => vec![],
        ClaudeStreamEvent::Error { error } => {
            vec![StreamEvent::Error {
                code: error.error_type,
                message: error.message,
            }]
        }
    }
}
