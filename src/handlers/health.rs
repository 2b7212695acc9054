// GET / handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use crate::gateway::Gateway;

pub async fn health_handler(gateway: Arc<Gateway>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&gateway.health()),
        StatusCode::OK,
    ))
}
