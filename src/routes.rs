// Route definitions, rejection recovery and the cross-origin layer

use std::convert::Infallible;
use std::sync::Arc;

use tracing::info;
use warp::http::{Method, StatusCode};
use warp::reply::{Reply, Response};
use warp::{Filter, Rejection};

use crate::cors::CorsPolicy;
use crate::error::error_reply;
use crate::gateway::Gateway;
use crate::handlers;
use crate::models::PreflightResponse;

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

pub fn configure_routes(
    gateway: Arc<Gateway>,
    cors: CorsPolicy,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    // OPTIONS on any path; never reaches a handler. Other methods reject as
    // not found so an unknown path still ends in 404 rather than 405.
    let preflight = warp::method()
        .and_then(|method: Method| async move {
            if method == Method::OPTIONS {
                Ok(())
            } else {
                Err(warp::reject::not_found())
            }
        })
        .untuple_one()
        .map(|| warp::reply::json(&PreflightResponse::ok()));

    // GET /
    let health = warp::path::end()
        .and(warp::get())
        .and(with_gateway(gateway.clone()))
        .and_then(handlers::health_handler);

    let api = warp::path("api");

    // GET /api/therapists
    let therapists = api
        .and(warp::path("therapists"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_gateway(gateway.clone()))
        .and_then(handlers::therapists_handler);

    // POST /api/chat
    let chat = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_gateway(gateway.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(handlers::chat_handler);

    // POST /api/summarize
    let summarize = api
        .and(warp::path("summarize"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_gateway(gateway))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(handlers::summarize_handler);

    let routes = preflight
        .or(health)
        .or(therapists)
        .or(chat)
        .or(summarize)
        .recover(handle_rejection);

    let cors = Arc::new(cors);
    warp::header::optional::<String>("origin")
        .and(warp::any().map(move || cors.clone()))
        .and(routes)
        .map(apply_cors)
        .with(warp::log::custom(access_log))
}

fn with_gateway(
    gateway: Arc<Gateway>,
) -> impl Filter<Extract = (Arc<Gateway>,), Error = Infallible> + Clone {
    warp::any().map(move || gateway.clone())
}

fn apply_cors<R: Reply>(origin: Option<String>, cors: Arc<CorsPolicy>, reply: R) -> Response {
    cors.apply(reply.into_response(), origin.as_deref())
}

/// Render every rejection in the same `{"error"}` shape as handler errors
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length header required")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(error_reply(status, message))
}

fn access_log(info: warp::log::Info<'_>) {
    info!(
        target: "therapist_gateway::access",
        method = %info.method(),
        path = info.path(),
        status = info.status().as_u16(),
        elapsed_ms = info.elapsed().as_millis() as u64,
        "request"
    );
}
