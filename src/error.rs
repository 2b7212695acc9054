//! Request-boundary error taxonomy

use thiserror::Error;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::llm::LlmError;
use crate::models::ErrorResponse;

/// Any failure a single request can end in
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or malformed fields, unknown persona id
    #[error("{0}")]
    InvalidRequest(String),

    /// The upstream model call failed; the text is passed to the caller
    #[error("{0}")]
    Upstream(String),
}

impl GatewayError {
    pub fn invalid(message: impl Into<String>) -> Self {
        GatewayError::InvalidRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for GatewayError {
    fn from(err: LlmError) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

/// Render a JSON `{"error": message}` body with the given status
pub fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: message.into(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

impl Reply for GatewayError {
    fn into_response(self) -> Response {
        error_reply(self.status(), self.to_string())
    }
}
