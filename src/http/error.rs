//! HTTP mapping for gateway errors
//!
//! Every error becomes a JSON body with the CORS headers attached,
//! whatever output format the client asked for.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::GatewayError;
use crate::http::cors::cors_headers;

impl GatewayError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::ToolTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::ConfigError(_)
            | GatewayError::IoError(_)
            | GatewayError::SerdeError(_)
            | GatewayError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::info!(status = %status.as_u16(), error = %self, "Request rejected");
        }

        let body = match self.details() {
            Some(lines) => json!({ "error": self.message(), "message": lines }),
            None => json!({ "error": self.message() }),
        };

        (status, cors_headers(), Json(body)).into_response()
    }
}
