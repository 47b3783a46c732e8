//! bookmarks-gateway-cli - command-line client for the bookmarks tool
//!
//! Runs the gateway's search and add operations without the HTTP server.
//!
//! # Examples
//!
//! ```bash
//! # Search bookmarks
//! bookmarks-gateway-cli search rust
//!
//! # Render exactly what GET /search?q=rust&format=text would return
//! bookmarks-gateway-cli search rust --format-as text
//!
//! # Add a bookmark
//! bookmarks-gateway-cli add --url https://www.rust-lang.org --title Rust --category dev
//!
//! # Show configuration
//! bookmarks-gateway-cli show-config
//! ```

use bookmarks_gateway::cli::{run, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
