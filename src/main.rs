//! bookmarks-gateway HTTP server entry point
//!
//! Usage: `bookmarks-gateway [PORT]` (default port 8000).

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use bookmarks_gateway::cli::ServerArgs;
use bookmarks_gateway::core::config::{Config, LoggingConfig};
use bookmarks_gateway::core::services::Services;
use bookmarks_gateway::core::xdg::XdgDirs;
use bookmarks_gateway::http;

/// Install the global tracing subscriber described by `logging`
fn init_logging(logging: &LoggingConfig, xdg: &XdgDirs) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(&logging.level)?;

    let fmt_layer = match &logging.file {
        Some(file) => {
            let path = xdg.resolve_log_file(file);
            XdgDirs::ensure_parent_exists(&path)?;
            let writer = OpenOptions::new().create(true).append(true).open(&path)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(writer));
            if logging.json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
        None => {
            let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            if logging.json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();

    let xdg = XdgDirs::new();

    // Load configuration, then let the command line win
    let mut config = Config::load_with_xdg(&xdg, args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    init_logging(&config.logging, &xdg)?;

    tracing::info!("Starting bookmarks gateway");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    xdg.log_paths();
    config.log_config();

    if !config.tool.command.exists() {
        tracing::warn!(
            "Bookmarks tool {:?} not found; search and add will fail until it is installed",
            config.tool.command
        );
    }

    let addr = config.bind_addr();
    let services = Arc::new(Services::new(config));
    let app = http::build_router(services);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
