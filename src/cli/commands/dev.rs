use anyhow::{Result, bail};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::core::ProcessRunner;

/// Build artifacts removed by `--cleanup`
const CLEANUP_DIRS: [&str; 3] = ["build", "dist", "pypots.egg-info"];

/// One parsed invocation of `pypots-cli dev`.
///
/// Constructed once from command line arguments, validated by
/// [`check_arguments`], then consumed by a single [`execute`] pass.
#[derive(Debug, Clone, Default)]
pub struct DevRequest {
    pub build: bool,
    pub cleanup: bool,
    pub run_tests: bool,
    pub test_filter: Option<String>,
    pub show_coverage: bool,
    pub lint_code: bool,
}

/// Run some checks on the arguments to avoid error usages.
///
/// All checks run before any external tool is touched; the first violation
/// aborts the invocation.
pub fn check_arguments(request: &DevRequest, root: &Path) -> Result<()> {
    // `pypots-cli dev` is only meaningful from the project root, where both
    // the docs and the package source live side by side.
    let under_project_root = root.join("docs").is_dir() && root.join("pypots").is_dir();
    if !under_project_root {
        bail!(
            "Command `pypots-cli dev` can only be run under the root directory of project PyPOTS, \
            but you're running it under the path {}. Please make a check.",
            root.display()
        );
    }

    if request.test_filter.is_some() && !request.run_tests {
        bail!(
            "Argument `-k` should combine the use of `--run_tests`. \
            Try `pypots-cli dev --run_tests -k your_pattern`"
        );
    }

    if request.show_coverage && !request.run_tests {
        bail!(
            "Argument `--show_coverage` should combine the use of `--run_tests`. \
            Try `pypots-cli dev --run_tests --show_coverage`"
        );
    }

    if request.cleanup && (request.run_tests || request.lint_code) {
        bail!("Argument `--cleanup` should be used alone. Try `pypots-cli dev --cleanup`");
    }

    Ok(())
}

/// Validate the request and perform the single action it selects.
///
/// Priority order: cleanup > build > run tests > lint code. With no action
/// flag set, validation still runs but nothing is executed.
pub fn execute(request: &DevRequest, root: &Path, runner: &dyn ProcessRunner) -> Result<()> {
    check_arguments(request, root)?;

    if request.cleanup {
        run_cleanup(root);
    } else if request.build {
        run_build(runner)?;
    } else if request.run_tests {
        run_test_suite(request, root, runner)?;
    } else if request.lint_code {
        run_linters(runner)?;
    } else {
        debug!("No action flag set, nothing to do");
    }

    Ok(())
}

/// Delete all caches and building files. Artifacts that are already absent
/// are not an error.
fn run_cleanup(root: &Path) {
    for dir in CLEANUP_DIRS {
        info!(directory = dir, "Removing build artifacts");
        let _ = fs::remove_dir_all(root.join(dir));
    }
}

/// Package the source code into a .tar.gz file and build a wheel.
fn run_build(runner: &dyn ProcessRunner) -> Result<()> {
    runner.invoke("python", &["setup.py", "sdist", "bdist", "bdist_wheel"])
}

/// Run the test suite, optionally filtered and optionally under coverage.
/// The pytest cache (and the coverage data file, when coverage ran) is
/// removed afterward; a failed run aborts before any removal.
fn run_test_suite(request: &DevRequest, root: &Path, runner: &dyn ProcessRunner) -> Result<()> {
    let mut pytest_args: Vec<&str> = Vec::new();
    if let Some(pattern) = request.test_filter.as_deref() {
        pytest_args.extend(["-k", pattern]);
    }

    if request.show_coverage {
        let mut coverage_args = vec!["run", "-m", "pytest"];
        coverage_args.extend(&pytest_args);
        runner.invoke("coverage", &coverage_args)?;

        runner.invoke("coverage", &["report", "-m"])?;
        let _ = fs::remove_file(root.join(".coverage"));
    } else {
        runner.invoke("pytest", &pytest_args)?;
    }

    let _ = fs::remove_dir_all(root.join(".pytest_cache"));
    Ok(())
}

/// Reformat the code base with Black, then report style violations with
/// Flake8.
fn run_linters(runner: &dyn ProcessRunner) -> Result<()> {
    info!("Reformatting with Black...");
    runner.invoke("black", &["."])?;

    info!("Linting with Flake8...");
    runner.invoke("flake8", &["."])?;

    Ok(())
}
