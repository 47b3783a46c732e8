//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;
use crate::core::types::BookmarkRecord;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for urls
    pub fn url(s: &str) -> ColoredString {
        s.blue().underline()
    }

    /// Style for categories
    pub fn category(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for tags
    pub fn tag(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// One-line summary of a bookmark: `[category] title <url> #tag ...`
pub fn format_record(record: &BookmarkRecord) -> String {
    let mut line = String::new();

    let category = record.category();
    if !category.is_empty() {
        line.push_str(&format!("[{}] ", colors::category(category)));
    }
    let title = record.title();
    if !title.is_empty() {
        line.push_str(&format!("{} ", colors::label(title)));
    }
    line.push_str(&format!("{}", colors::url(record.url())));

    for tag in record.tags() {
        line.push_str(&format!(" {}", colors::tag(&format!("#{tag}"))));
    }

    line
}

/// Print output based on format
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            // Human format should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
