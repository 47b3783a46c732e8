//! Completions command - generate shell completion scripts

use crate::cli::{Cli, ServerArgs};
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Complete the `bookmarks-gateway` server binary instead of this client
    #[arg(long)]
    pub server: bool,
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = if args.server {
        ServerArgs::command()
    } else {
        Cli::command()
    };
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
