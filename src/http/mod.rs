//! HTTP adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides the search, add, page and static asset endpoints via the
//! Axum web framework.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::build_router;
