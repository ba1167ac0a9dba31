use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::process::Command;
use tracing::info;

/// Guidance shown when a required developer tool is not installed.
const ENV_SETUP_GUIDANCE: &str =
    "`pypots-cli dev` is for PyPOTS developers to run tests easily, \
    therefore it needs a complete PyPOTS development environment. \
    Please refer to https://github.com/WenjieDu/PyPOTS/blob/main/environment-dev.yml \
    for dependency details.";

/// Capability for invoking an external tool and blocking until it finishes.
///
/// The production implementation is [`ShellRunner`]; tests substitute a
/// recording mock so no real processes are spawned.
pub trait ProcessRunner {
    /// Run `program` with `args`, returning `Err` if the program is missing,
    /// cannot be spawned, or exits with a non-zero status.
    fn invoke(&self, program: &str, args: &[&str]) -> Result<()>;
}

/// Runs external tools via `std::process::Command`, inheriting stdio and the
/// current working directory.
pub struct ShellRunner;

impl ProcessRunner for ShellRunner {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<()> {
        info!(command = %render_command(program, args), "Executing external tool");

        let status = match Command::new(program).args(args).status() {
            Ok(status) => status,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                anyhow::bail!("`{program}` was not found on PATH. {ENV_SETUP_GUIDANCE}")
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to execute `{program}`"));
            }
        };

        if !status.success() {
            anyhow::bail!("`{}` failed with {status}", render_command(program, args));
        }

        Ok(())
    }
}

/// Render a program and its arguments as a single display string
fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command() {
        assert_eq!(render_command("pytest", &[]), "pytest");
        assert_eq!(
            render_command("coverage", &["run", "-m", "pytest"]),
            "coverage run -m pytest"
        );
    }

    #[test]
    fn test_missing_program_reports_environment_guidance() {
        let err = ShellRunner
            .invoke("definitely-not-an-installed-tool", &[])
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("definitely-not-an-installed-tool"));
        assert!(message.contains("environment-dev.yml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_invocation() {
        ShellRunner.invoke("true", &[]).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_an_error() {
        let err = ShellRunner.invoke("false", &[]).unwrap_err();
        assert!(err.to_string().contains("`false` failed"));
    }
}
