mod cli;
pub mod core;

use anyhow::{Context, Result};
use clap::Parser;
use cli::CliArgs;
use tracing_subscriber::EnvFilter;

/// Set up logging; RUST_LOG overrides the default `info` level
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let cli_args = CliArgs::parse();

    cli::execute_cli_command(&cli_args).context("Failed to execute CLI command")?;

    Ok(())
}
