//! Core domain logic (protocol-agnostic)
//!
//! This module contains all logic that is independent of the
//! transport (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Bookmark records, formats, response payloads
//! - **params**: Query string / form / JSON parameter decoding
//! - **tool**: External bookmark tool client (subprocess + timeout)
//! - **render**: json / text / html rendering and page templates
//! - **assets**: Static file lookup
//! - **xdg**: XDG directory handling
//! - **services**: Unified service container

pub mod assets;
pub mod config;
pub mod error;
pub mod params;
pub mod render;
pub mod services;
pub mod tool;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{GatewayError, Result};
pub use services::Services;
