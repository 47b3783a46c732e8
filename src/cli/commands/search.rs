//! Search command - fuzzy search bookmarks through the tool

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::render;
use crate::core::services::Services;
use crate::core::types::Format;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (may be empty)
    pub query: String,

    /// Print the result exactly as the HTTP gateway would render it
    #[arg(long = "format-as", value_enum)]
    pub format_as: Option<RenderFormat>,

    /// Maximum number of results to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Gateway rendering formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Json,
    Text,
    Html,
}

impl From<RenderFormat> for Format {
    fn from(value: RenderFormat) -> Self {
        match value {
            RenderFormat::Json => Format::Json,
            RenderFormat::Text => Format::Text,
            RenderFormat::Html => Format::Html,
        }
    }
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput<'a> {
    pub query: &'a str,
    pub total_results: usize,
    pub results: &'a [crate::core::types::BookmarkRecord],
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = services.tool.suggest(&args.query).await?;
    let total_results = records.len();
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    if let Some(render_as) = args.format_as {
        println!("{}", render::render_records(&records, render_as.into())?);
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            if records.is_empty() {
                println!("No bookmarks found for '{}'", colors::label(&args.query));
            } else {
                println!(
                    "Found {} bookmark(s):\n",
                    colors::number(&total_results.to_string())
                );
                for record in &records {
                    println!("  {}", output::format_record(record));
                }
                if records.len() < total_results {
                    println!(
                        "\n{}",
                        colors::dim(&format!(
                            "... {} more not shown",
                            total_results - records.len()
                        ))
                    );
                }
            }
        }
        OutputFormat::Json => {
            output::print_output(
                &SearchOutput {
                    query: &args.query,
                    total_results,
                    results: &records,
                },
                format,
            );
        }
    }

    Ok(())
}
