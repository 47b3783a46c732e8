//! Access logging for the gateway

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

/// Log one line per request
///
/// Server-side failures (tool errors, timeouts) are logged at ERROR,
/// client mistakes such as a missing `q` or an unknown asset at WARN.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(%method, %path, %query, status, elapsed_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %path, %query, status, elapsed_ms, "Request rejected");
    } else {
        info!(%method, %path, %query, status, elapsed_ms, "Request served");
    }

    response
}
