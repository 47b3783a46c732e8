// Test helper functions

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::response::Response;
use axum::Router;
use bookmarks_gateway::core::config::Config;
use bookmarks_gateway::core::services::Services;
use bookmarks_gateway::http;

/// Create services that run `script` through /bin/sh
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(script: &Path, static_dir: &Path, timeout_sec: u64) -> Services {
    let mut config = Config::default();
    config.tool.command = PathBuf::from("/bin/sh");
    config.tool.args = vec![script.to_string_lossy().into_owned()];
    config.tool.timeout_sec = timeout_sec;
    config.assets.static_dir = static_dir.to_path_buf();

    Services::new(config)
}

/// Create the full router around a fake tool and asset directory
#[allow(dead_code)] // Used in integration tests
pub fn create_test_app(script: &Path, static_dir: &Path) -> Router {
    http::build_router(Arc::new(create_test_services(script, static_dir, 5)))
}

/// Read a response body as UTF-8
#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// Read a response body as JSON
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).expect("Body is not JSON")
}
