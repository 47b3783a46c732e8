//! XDG Base Directory Support
//!
//! Resolves where the gateway looks for its config file and where
//! relative log file paths land.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "bookmarks-gateway";

/// XDG directory structure for the gateway
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit BOOKMARKS_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG defaults (~/.config, ~/.local/state)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve(
                "BOOKMARKS_CONFIG_DIR",
                "XDG_CONFIG_HOME",
                &[".config"],
            ),
            state_dir: Self::resolve(
                "BOOKMARKS_STATE_DIR",
                "XDG_STATE_HOME",
                &[".local", "state"],
            ),
        }
    }

    fn resolve(app_var: &str, xdg_var: &str, home_default: &[&str]) -> PathBuf {
        if let Ok(dir) = env::var(app_var) {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var(xdg_var) {
            return PathBuf::from(xdg).join(APP_DIR);
        }

        let mut dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        for part in home_default {
            dir.push(part);
        }
        dir.join(APP_DIR)
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Get logs directory path
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// Anchor a relative log file path in the logs directory
    pub fn resolve_log_file(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.logs_dir().join(file)
        }
    }

    /// Create the parent directory of `file` if it is missing
    pub fn ensure_parent_exists(file: &Path) -> std::io::Result<()> {
        match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  State: {:?}", self.state_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
