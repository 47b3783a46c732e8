//! HTTP request handlers for the gateway
//!
//! Search and add delegate to the external bookmark tool; the remaining
//! handlers serve fixed pages and static assets.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::core::error::{GatewayError, Result};
use crate::core::params::RequestParams;
use crate::core::render;
use crate::core::services::Services;
use crate::core::types::{Format, HealthResponse};
use crate::http::cors::cors_headers;

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Landing page
pub async fn index_handler() -> Html<String> {
    Html(render::index_page())
}

/// Add-bookmark form page
pub async fn form_handler() -> Html<String> {
    Html(render::form_page())
}

/// Search handler
///
/// `GET /search?q=<query>&format={json|text|html}`. The format defaults
/// to html. An empty `q` is forwarded to the tool; a missing one is
/// rejected.
///
/// # Errors
///
/// - `BadRequest`: `q` missing or unknown `format`
/// - `Upstream`: tool exited non-zero or printed invalid JSON
/// - `ToolTimeout`: tool did not finish in time
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    let params = RequestParams::from_urlencoded(query.as_deref().unwrap_or_default().as_bytes());
    tracing::debug!(params = ?params, "GET params");

    let q = params.require("q")?;
    let format = match params.get("format") {
        Some(format) => format.parse::<Format>()?,
        None => Format::default(),
    };

    let body = services.search(q, format).await?;

    let response = match format {
        Format::Json => (
            cors_headers(),
            [(header::CONTENT_TYPE, format.content_type())],
            body,
        )
            .into_response(),
        Format::Text | Format::Html => {
            ([(header::CONTENT_TYPE, format.content_type())], body).into_response()
        }
    };

    Ok(response)
}

/// Add bookmark handler
///
/// `POST /add` with a JSON object or urlencoded form body carrying
/// `url`, `title` and `category`.
///
/// # Errors
///
/// - `BadRequest`: malformed body or missing `url`
/// - `Upstream`: tool exited non-zero; its stderr lines are returned
/// - `ToolTimeout`: tool did not finish in time
pub async fn add_handler(
    State(services): State<Arc<Services>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    tracing::info!("POST request");

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let params = RequestParams::from_body(content_type, &body)?;
    let bookmark = params.new_bookmark()?;

    let confirmation = services.add_bookmark(&bookmark).await?;

    Ok(json_response(StatusCode::OK, &confirmation))
}

/// Static asset handler, used as the router fallback
///
/// # Errors
///
/// - `NotFound`: missing file, unsupported extension, or non-GET method
pub async fn static_handler(
    State(services): State<Arc<Services>>,
    method: Method,
    uri: Uri,
) -> Result<Response> {
    if method != Method::GET && method != Method::HEAD {
        return Err(GatewayError::NotFound(format!("Invalid path {}", uri.path())));
    }

    let asset = services.assets.load(uri.path()).await?;

    Ok(([(header::CONTENT_TYPE, asset.content_type)], asset.bytes).into_response())
}

/// JSON body with the CORS headers attached
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    (status, cors_headers(), Json(value)).into_response()
}
