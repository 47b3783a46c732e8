//! Route table for the gateway

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::core::services::Services;
use crate::http::cors::{cors_headers, preflight_handler};
use crate::http::handlers;
use crate::http::middleware::log_request;

/// Build the application router
///
/// Anything that is not a known route falls through to the static
/// asset handler.
pub fn build_router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/form", get(handlers::form_handler))
        .route("/health", get(handlers::health_handler))
        .route("/search", get(handlers::search_handler))
        .route(
            "/add",
            post(handlers::add_handler).options(preflight_handler),
        )
        .fallback(handlers::static_handler)
        .layer(middleware::from_fn(log_request))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(services)
}

/// Turn a handler panic into a 500 instead of dropping the connection
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors_headers(),
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
