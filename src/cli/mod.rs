//! CLI adapter for the gateway
//!
//! Holds the argument parser of the `bookmarks-gateway` server binary and
//! the `bookmarks-gateway-cli` client, which runs the same search and add
//! operations from a terminal. Parallel to `http/`: both depend on
//! `core/` but not on each other.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;

/// bookmarks-gateway - HTTP front-end for the bash-bookmarks tool
#[derive(Parser, Debug)]
#[command(name = "bookmarks-gateway")]
#[command(version)]
#[command(about = "HTTP gateway for the bash-bookmarks tool", long_about = None)]
pub struct ServerArgs {
    /// Port to listen on (default 8000)
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Config file to load instead of the XDG location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Path of the bookmarks executable
    #[arg(long)]
    pub tool: Option<PathBuf>,

    /// Directory served for static assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Seconds to wait for the bookmarks tool before giving up
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ServerArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(tool) = &self.tool {
            config.tool.command = tool.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.assets.static_dir = dir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.tool.timeout_sec = timeout;
        }
    }
}

/// bookmarks-gateway-cli - search and add bookmarks from the terminal
#[derive(Parser, Debug)]
#[command(name = "bookmarks-gateway-cli")]
#[command(version)]
#[command(about = "Search and add bookmarks through the bookmarks tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file to load instead of the XDG location
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fuzzy search bookmarks
    Search(commands::SearchArgs),

    /// Add a bookmark
    Add(commands::AddArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  bookmarks-gateway-cli completions bash > ~/.local/share/bash-completion/completions/bookmarks-gateway-cli
    ///   zsh:   bookmarks-gateway-cli completions zsh > ~/.zfunc/_bookmarks-gateway-cli
    ///   fish:  bookmarks-gateway-cli completions fish > ~/.config/fish/completions/bookmarks-gateway-cli.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    let config = Config::load_with_xdg(&xdg, cli.config.as_deref())?;
    if !config.tool.command.exists() && !matches!(cli.command, Commands::ShowConfig(_)) {
        output::print_warning(&format!(
            "bookmarks tool {} not found",
            config.tool.command.display()
        ));
    }
    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Add(args) => commands::add::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
