//! Configuration management for the bookmarks gateway.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Everything a handler needs (tool location, asset root, log level)
//! is resolved here once and passed down explicitly.

use crate::core::error::{GatewayError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// External bookmark tool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolConfig {
    /// Executable to run
    #[serde(default = "default_tool_command")]
    pub command: PathBuf,

    /// Arguments placed before the operation name
    ///
    /// Lets the tool run through an interpreter, e.g.
    /// `command = "/bin/bash"`, `args = ["/opt/bookmarks/bookmarks"]`.
    #[serde(default)]
    pub args: Vec<String>,

    /// Upper bound for a single tool invocation, in seconds
    #[serde(default = "default_tool_timeout")]
    pub timeout_sec: u64,
}

/// Static asset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or
    /// `bookmarks_gateway=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,

    /// Append logs to this file instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Directory holding the running executable, falling back to `.`
fn install_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_tool_command() -> PathBuf {
    install_dir().join("bookmarks")
}

fn default_tool_timeout() -> u64 {
    30
}

fn default_static_dir() -> PathBuf {
    install_dir().join("static")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            command: default_tool_command(),
            args: Vec::new(),
            timeout_sec: default_tool_timeout(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg, None)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order for the TOML file:
    /// 1. `explicit` path (the `--config` flag)
    /// 2. BOOKMARKS_CONFIG env var
    /// 3. XDG config file (~/.config/bookmarks-gateway/config.toml)
    /// 4. ./bookmarks-gateway.toml
    /// 5. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs, explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("BOOKMARKS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("bookmarks-gateway.toml").exists() {
                Self::from_file("bookmarks-gateway.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("BOOKMARKS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("BOOKMARKS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Tool configuration
        if let Ok(cmd) = env::var("BOOKMARKS_CMD") {
            if !cmd.is_empty() {
                self.tool.command = PathBuf::from(cmd);
            }
        }
        if let Ok(timeout) = env::var("BOOKMARKS_TOOL_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.tool.timeout_sec = t;
            }
        }

        // Assets configuration
        if let Ok(dir) = env::var("BOOKMARKS_STATIC_DIR") {
            self.assets.static_dir = PathBuf::from(dir);
        }

        // Logging configuration. DEBUG is the historical knob and only
        // applies when BOOKMARKS_LOG is unset.
        if let Ok(level) = env::var("BOOKMARKS_LOG") {
            self.logging.level = level;
        } else if let Ok(level) = env::var("DEBUG") {
            self.logging.level = level.to_lowercase();
        }
        if let Ok(json) = env::var("BOOKMARKS_LOG_JSON") {
            self.logging.json = matches!(json.as_str(), "1" | "true" | "yes");
        }
        if let Ok(file) = env::var("BOOKMARKS_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.tool.command.as_os_str().is_empty() {
            return Err(GatewayError::ConfigError(
                "Tool command cannot be empty".to_string(),
            ));
        }

        if self.tool.timeout_sec == 0 {
            return Err(GatewayError::ConfigError(
                "Tool timeout must be non-zero".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(GatewayError::ConfigError(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Listener address as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}", self.bind_addr());
        tracing::info!("  Tool: {:?} {:?}", self.tool.command, self.tool.args);
        tracing::info!("  Tool timeout: {}s", self.tool.timeout_sec);
        tracing::info!("  Static dir: {:?}", self.assets.static_dir);
        tracing::info!("  Log level: {}", self.logging.level);
    }
}
