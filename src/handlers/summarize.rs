// POST /api/summarize handler

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use tracing::Instrument;
use uuid::Uuid;

use super::{decode, respond};
use crate::gateway::Gateway;
use crate::models::SummaryRequest;

pub async fn summarize_handler(
    gateway: Arc<Gateway>,
    body: Bytes,
) -> Result<impl warp::Reply, Infallible> {
    let span = tracing::info_span!("summarize", request_id = %Uuid::new_v4());

    let result = async {
        let request: SummaryRequest = decode(&body)?;
        gateway.summarize(request).await
    }
    .instrument(span)
    .await;

    Ok(respond("/api/summarize", result))
}
