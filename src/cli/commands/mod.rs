//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod add;
pub mod completions;
pub mod config;
pub mod search;

// Re-export argument types for use in mod.rs
pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use search::SearchArgs;
