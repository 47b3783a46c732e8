//! Add command - insert a bookmark through the tool

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::NewBookmark;
use clap::Args;
use serde_json::json;
use std::sync::Arc;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Bookmark url
    #[arg(long, short = 'u')]
    pub url: String,

    /// Bookmark title
    #[arg(long, short = 't', default_value = "")]
    pub title: String,

    /// Bookmark category
    #[arg(long, short = 'C', default_value = "")]
    pub category: String,
}

/// Execute the add command
pub async fn execute(
    args: AddArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.url.trim().is_empty() {
        return Err("url cannot be empty".into());
    }

    let bookmark = NewBookmark {
        url: args.url,
        title: args.title,
        category: args.category,
    };

    match services.add_bookmark(&bookmark).await {
        Ok(confirmation) => {
            match format {
                OutputFormat::Human => output::print_success(&confirmation.success),
                OutputFormat::Json => output::print_output(&confirmation, format),
            }
            Ok(())
        }
        Err(err) => {
            let details = err.details().map(<[String]>::to_vec).unwrap_or_default();
            match format {
                OutputFormat::Human => {
                    for line in &details {
                        output::print_error(line);
                    }
                }
                OutputFormat::Json => output::print_output(
                    &json!({ "error": err.message(), "message": details }),
                    format,
                ),
            }
            Err(err.into())
        }
    }
}
