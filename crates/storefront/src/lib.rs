//! Arden Way Storefront library.
//!
//! This crate provides the studio site as a library, allowing the router to
//! be tested in-process and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, extract::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
    session_lock_middleware,
};
use crate::state::AppState;

/// Build the full storefront router with its middleware stack.
///
/// Sentry layers are not included; the binary adds them outermost.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_files = ServeDir::new(&state.config().static_dir);

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
        )
    });

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    session_lock_middleware,
                ))
                .layer(session_layer)
                .layer(axum::middleware::from_fn(security_headers_middleware)),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// The site has no external dependencies, so liveness is readiness.
async fn health() -> &'static str {
    "ok"
}
