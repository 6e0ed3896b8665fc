//! Codequill CLI
//!
//! Bundles the tracked files of a git project into a single text file.

use anyhow::Result;
use clap::Parser;
use codequill::cli::{commands, Cli};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    commands::bundle::execute(cli)
}
