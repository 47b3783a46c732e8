//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub listen: String,
    pub tool: ToolInfo,
    pub static_dir: String,
    pub log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub command: String,
    pub args: Vec<String>,
    pub timeout_sec: u64,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let config_file = args
        .all
        .then(|| XdgDirs::new().config_file().to_string_lossy().into_owned());

    let response = ConfigResponse {
        listen: config.bind_addr(),
        tool: ToolInfo {
            command: config.tool.command.to_string_lossy().into_owned(),
            args: config.tool.args.clone(),
            timeout_sec: config.tool.timeout_sec,
        },
        static_dir: config.assets.static_dir.to_string_lossy().into_owned(),
        log_level: config.logging.level.clone(),
        config_file,
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  listen: {}", response.listen);
            println!("  tool:");
            println!("    command: {}", response.tool.command);
            println!("    args: {:?}", response.tool.args);
            println!("    timeout_sec: {}", response.tool.timeout_sec);
            println!("  static_dir: {}", response.static_dir);
            println!("  log_level: {}", response.log_level);
            if let Some(file) = &response.config_file {
                println!("  config_file: {file}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
