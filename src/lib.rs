//! bookmarks-gateway - HTTP front-end for the bash-bookmarks tool
//!
//! Accepts search and add requests over HTTP, runs the external
//! `bookmarks` command-line tool to do the actual work, and renders its
//! JSON output as HTML, plain text or JSON.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, params, xdg
//!   - tool (external tool client with timeout)
//!   - render (json / text / html)
//!   - assets (static files)
//!   - services (unified service container)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, router, cors, middleware
//!
//! - **cli**: command-line adapter (depends on core)
//!   - server arguments, client commands, output helpers

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{GatewayError, Result};
pub use core::services::Services;
pub use core::types::*;
