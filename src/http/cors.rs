//! CORS headers for JSON-producing endpoints
//!
//! The gateway answers browser extensions and bookmarklets from any
//! origin, so the header set is fixed rather than negotiated.

use axum::http::{header, HeaderName, StatusCode};
use axum::response::IntoResponse;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
pub const ALLOW_CREDENTIALS: &str = "true";
pub const MAX_AGE: &str = "86400";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";

/// The five CORS headers, usable as response parts
pub fn cors_headers() -> [(HeaderName, &'static str); 5] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
        (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, ALLOW_CREDENTIALS),
        (header::ACCESS_CONTROL_MAX_AGE, MAX_AGE),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
    ]
}

/// Preflight handler for `OPTIONS /add`
pub async fn preflight_handler() -> impl IntoResponse {
    tracing::info!("OPTION request");
    (StatusCode::OK, cors_headers())
}
