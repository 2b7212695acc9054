// Handlers module

pub mod chat;
pub mod health;
pub mod summarize;
pub mod therapists;

pub use chat::chat_handler;
pub use health::health_handler;
pub use summarize::summarize_handler;
pub use therapists::therapists_handler;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::error::GatewayError;
use crate::gateway::INVALID_REQUEST_DATA;

/// Decode a JSON request body, mapping any failure to `InvalidRequest`
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "rejecting malformed request body");
        GatewayError::invalid(INVALID_REQUEST_DATA)
    })
}

/// Turn an operation result into a 200 JSON reply or an error reply
pub(crate) fn respond<T: Serialize>(route: &str, result: Result<T, GatewayError>) -> Response {
    match result {
        Ok(body) => {
            warp::reply::with_status(warp::reply::json(&body), StatusCode::OK).into_response()
        }
        Err(err) => {
            match &err {
                GatewayError::InvalidRequest(message) => {
                    warn!(route, %message, "invalid request");
                }
                GatewayError::Upstream(message) => {
                    error!(route, %message, "upstream call failed");
                }
            }
            err.into_response()
        }
    }
}
