//! Unified service container for the gateway
//!
//! Provides shared access to all core services.

use crate::core::assets::StaticAssets;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::render;
use crate::core::tool::BookmarkTool;
use crate::core::types::{AddResponse, Format, NewBookmark};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// External bookmark tool client
    pub tool: Arc<BookmarkTool>,

    /// Static asset store
    pub assets: Arc<StaticAssets>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let tool = Arc::new(BookmarkTool::new(&config.tool));
        let assets = Arc::new(StaticAssets::new(config.assets.static_dir.clone()));

        Self {
            tool,
            assets,
            config: Arc::new(config),
        }
    }

    /// Search bookmarks and render the result
    pub async fn search(&self, query: &str, format: Format) -> Result<String> {
        let records = self.tool.suggest(query).await?;
        tracing::info!(count = records.len(), format = %format, "Output format");
        render::render_records(&records, format)
    }

    /// Add a bookmark
    pub async fn add_bookmark(&self, bookmark: &NewBookmark) -> Result<AddResponse> {
        self.tool.add(bookmark).await?;
        Ok(AddResponse::default())
    }
}
