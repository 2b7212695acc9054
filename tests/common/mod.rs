//! Shared fixtures: a scripted upstream and a fully wired route tree

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use therapist_gateway::cors::CorsPolicy;
use therapist_gateway::gateway::Gateway;
use therapist_gateway::llm::{
    ContentBlockStart, ContentDelta, EventStream, FinishReason, GenerateRequest, LlmError,
    LlmProvider, StreamEvent, UsageMetadata,
};
use therapist_gateway::personas::PersonaRegistry;
use therapist_gateway::routes::configure_routes;
use warp::{Filter, Rejection, Reply};

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// What the fake upstream does when called
pub enum Script {
    /// Stream this text back as one text block, in two deltas
    Reply(String),
    /// Fail the call as an authentication error with this message
    Unauthorized(String),
    /// Finish without any content block
    Empty,
}

/// Upstream stand-in that records every request it receives
pub struct ScriptedProvider {
    script: Script,
    calls: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Script::Reply(text.to_string()))
    }

    pub fn calls(&self) -> Vec<GenerateRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError> {
        self.calls.lock().unwrap().push(request);

        let end = StreamEvent::MessageEnd {
            finish_reason: FinishReason::EndTurn,
            usage: UsageMetadata::new(20, 10),
        };

        let events = match &self.script {
            Script::Reply(text) => {
                let mid = text
                    .char_indices()
                    .nth(text.chars().count() / 2)
                    .map_or(text.len(), |(i, _)| i);
                let (head, tail) = text.split_at(mid);
                vec![
                    StreamEvent::ContentBlockStart {
                        index: 0,
                        block: ContentBlockStart::Text {
                            text: String::new(),
                        },
                    },
                    StreamEvent::ContentDelta {
                        index: 0,
                        delta: ContentDelta::TextDelta {
                            text: head.to_string(),
                        },
                    },
                    StreamEvent::ContentDelta {
                        index: 0,
                        delta: ContentDelta::TextDelta {
                            text: tail.to_string(),
                        },
                    },
                    StreamEvent::ContentBlockEnd { index: 0 },
                    end,
                ]
            }
            Script::Unauthorized(message) => {
                return Err(LlmError::AuthenticationError(message.clone()));
            }
            Script::Empty => vec![end],
        };

        Ok(Box::pin(futures::stream::iter(events.into_iter().map(Ok))))
    }
}

/// Routes over the built-in personas, the default origin list, and `provider`
pub fn app(
    provider: Arc<ScriptedProvider>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone + 'static {
    app_with_cors(provider, CorsPolicy::default())
}

pub fn app_with_cors(
    provider: Arc<ScriptedProvider>,
    cors: CorsPolicy,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone + 'static {
    let gateway = Gateway::new(PersonaRegistry::builtin(), provider);
    configure_routes(Arc::new(gateway), cors)
}

pub fn json_body(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).expect("response body is JSON")
}
