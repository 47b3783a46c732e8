//! CLI test helpers
//!
//! Arc<Services> wrappers matching CLI execute() signatures.

use bookmarks_gateway::core::services::Services;
use std::sync::Arc;

use crate::common::{create_test_services, FakeTool, StaticDir};

/// Create CLI services around `tool` (keep both fixtures alive during the test)
pub fn create_cli_test_services(tool: &FakeTool) -> (Arc<Services>, StaticDir) {
    let assets = StaticDir::empty();
    let services = create_test_services(&tool.script, assets.dir.path(), 5);
    (Arc::new(services), assets)
}
