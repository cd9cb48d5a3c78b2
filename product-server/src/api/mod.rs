//! HTTP API
//!
//! Each submodule exposes a `router()`; [`build_app`] merges them.

pub mod extract;
pub mod health;
pub mod products;
pub mod products_query;

use axum::{Router, middleware};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    tracing::info!(
        target: "http_access",
        %method,
        %uri,
        status = status.as_u16(),
        elapsed_ms,
        "{} {} {}",
        method,
        uri,
        status
    );

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(products::router())
        .merge(products_query::router())
}

/// Full application: routes, state and middleware
pub fn router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}
