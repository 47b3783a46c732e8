//! Static asset lookup
//!
//! Files are served from a single root directory. Only a fixed set of
//! extensions is served; anything else is reported as not found.

use std::path::{Component, Path, PathBuf};

use crate::core::error::{GatewayError, Result};

/// Extension to content-type table
const CONTENT_TYPES: &[(&str, &str)] = &[
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".html", "text/html"),
    (".svg", "image/svg+xml"),
    (".css", "text/css"),
    (".png", "image/png"),
];

/// A static file ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Static file store rooted at one directory
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path to a file beneath the root
    ///
    /// Returns `None` for paths that try to leave the root or that do not
    /// name an existing regular file.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = Path::new(request_path.trim_start_matches('/'));
        if relative.as_os_str().is_empty() {
            return None;
        }

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }

        let path = self.root.join(relative);
        path.is_file().then_some(path)
    }

    /// Load the asset for `request_path`
    pub async fn load(&self, request_path: &str) -> Result<Asset> {
        let path = self
            .resolve(request_path)
            .ok_or_else(|| GatewayError::NotFound(format!("Not found: {request_path}")))?;

        let extension = dotted_extension(&path);
        let content_type = content_type_for(&extension)
            .ok_or_else(|| GatewayError::NotFound(format!("Invalid extension {extension}")))?;

        tracing::debug!(path = ?path, content_type, "Serving static asset");
        let bytes = tokio::fs::read(&path).await?;

        Ok(Asset {
            content_type,
            bytes,
        })
    }
}

/// Extension including the leading dot, or empty when there is none
fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Content type for a dotted extension such as `.css`
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}
