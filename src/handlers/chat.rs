// POST /api/chat handler

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use tracing::Instrument;
use uuid::Uuid;

use super::{decode, respond};
use crate::gateway::Gateway;
use crate::models::ChatRequest;

pub async fn chat_handler(
    gateway: Arc<Gateway>,
    body: Bytes,
) -> Result<impl warp::Reply, Infallible> {
    let span = tracing::info_span!("chat", request_id = %Uuid::new_v4());

    let result = async {
        let request: ChatRequest = decode(&body)?;
        gateway.chat(request).await
    }
    .instrument(span)
    .await;

    Ok(respond("/api/chat", result))
}
