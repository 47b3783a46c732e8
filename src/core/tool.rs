//! Client for the external bookmark tool
//!
//! Every bookmark operation runs the tool as a child process and waits
//! for it to exit. Invocations are bounded by the configured timeout;
//! a child that outlives it is killed.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, error, info, warn};

use crate::core::config::ToolConfig;
use crate::core::error::{GatewayError, Result};
use crate::core::types::{BookmarkRecord, NewBookmark};

/// Detail returned to clients when the tool cannot be started
const TOOL_UNAVAILABLE: &str = "bookmark tool unavailable";

/// Handle to the external bookmark tool
#[derive(Debug, Clone)]
pub struct BookmarkTool {
    program: PathBuf,
    leading_args: Vec<String>,
    timeout: Duration,
}

impl BookmarkTool {
    pub fn new(config: &ToolConfig) -> Self {
        Self {
            program: config.command.clone(),
            leading_args: config.args.clone(),
            timeout: Duration::from_secs(config.timeout_sec),
        }
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fuzzy search via `suggest <query>`
    ///
    /// The tool must exit 0 and print a JSON array of bookmark records.
    pub async fn suggest(&self, query: &str) -> Result<Vec<BookmarkRecord>> {
        info!(query = %query, "Searching bookmarks");

        let failure = || format!("Error searching for {query}");

        let output = self
            .run(&["suggest".into(), query.into()])
            .await
            .map_err(|e| match e {
                GatewayError::ToolTimeout { .. } => e,
                other => {
                    error!(error = %other, "Bookmark tool could not be run");
                    GatewayError::upstream(failure())
                }
            })?;

        if !output.status.success() {
            error!(
                status = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Error searching for {}",
                query
            );
            return Err(GatewayError::upstream(failure()));
        }

        debug!(stdout = %String::from_utf8_lossy(&output.stdout), "Suggest result");

        serde_json::from_slice(&output.stdout).map_err(|e| {
            error!(error = %e, "Bookmark tool printed unparsable output");
            GatewayError::upstream(failure())
        })
    }

    /// Insert a bookmark via `add --uri <url> --title <title> --category <category>`
    ///
    /// On a non-zero exit the non-empty stderr lines are returned as the
    /// error details.
    pub async fn add(&self, bookmark: &NewBookmark) -> Result<()> {
        info!(
            url = %bookmark.url,
            title = %bookmark.title,
            category = %bookmark.category,
            "Adding bookmark"
        );

        let output = self
            .run(&[
                "add".into(),
                "--uri".into(),
                bookmark.url.as_str().into(),
                "--title".into(),
                bookmark.title.as_str().into(),
                "--category".into(),
                bookmark.category.as_str().into(),
            ])
            .await
            .map_err(|e| match e {
                GatewayError::ToolTimeout { .. } => e,
                other => {
                    error!(error = %other, "Bookmark tool could not be run");
                    GatewayError::Upstream {
                        error: "Error adding url".to_string(),
                        message: Some(vec![TOOL_UNAVAILABLE.to_string()]),
                    }
                }
            })?;

        if !output.status.success() {
            error!(status = ?output.status.code(), "Error adding url");
            return Err(GatewayError::Upstream {
                error: "Error adding url".to_string(),
                message: Some(stderr_lines(&output.stderr)),
            });
        }

        Ok(())
    }

    /// Run the tool with `args` after the configured leading arguments
    async fn run(&self, args: &[OsString]) -> Result<Output> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        info!(program = ?self.program, args = ?args, "Executing bookmark tool");

        let start = Instant::now();
        let child = command.spawn().map_err(|e| {
            GatewayError::upstream(format!(
                "Failed to start bookmark tool {}: {e}",
                self.program.display()
            ))
        })?;

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                debug!(
                    status = ?output.status.code(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Bookmark tool exited"
                );
                Ok(output)
            }
            Ok(Err(e)) => Err(GatewayError::IoError(e)),
            Err(_) => {
                // Dropping the wait future drops the child, which kills it.
                warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "Bookmark tool timed out"
                );
                Err(GatewayError::ToolTimeout {
                    after_secs: self.timeout.as_secs(),
                })
            }
        }
    }
}

/// Split stderr into lines, dropping blank ones
pub fn stderr_lines(stderr: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stderr)
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
