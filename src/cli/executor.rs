use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};

use crate::cli::commands::dev::{self, DevRequest};
use crate::cli::{CliArgs, CliSubCommands};
use crate::core::ShellRunner;

/// Execute CLI command based on the subcommand
pub fn execute_cli_command(args: &CliArgs) -> Result<()> {
    match &args.command {
        CliSubCommands::Dev {
            build,
            cleanup,
            run_tests,
            k,
            show_coverage,
            lint_code,
        } => {
            let request = DevRequest {
                build: *build,
                cleanup: *cleanup,
                run_tests: *run_tests,
                test_filter: k.clone(),
                show_coverage: *show_coverage,
                lint_code: *lint_code,
            };

            let root = std::env::current_dir()
                .context("Failed to resolve the current working directory")?;

            dev::execute(&request, &root, &ShellRunner)
                .context("Failed to execute dev command")?;

            println!("{}", "✓ Done.".with(Color::Green).bold());
        }
    }
    Ok(())
}
