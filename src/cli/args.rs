use clap::{Parser, Subcommand, builder::Styles};

/// Styles for clap output
const STYLES: Styles = Styles::styled()
    .header(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .usage(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(clap::builder::styling::AnsiColor::Yellow.on_default());

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "pypots-cli")]
#[command(author, version, about)]
#[command(styles = STYLES)]
#[command(
    long_about = "CLI tools helping develop PyPOTS.\n\n\
    The `dev` subcommand eases running tests and linting code with Black and Flake8.\n\
    It must be run from the root directory of the PyPOTS project."
)]
#[command(after_long_help = "Examples:\n  \
    pypots-cli dev --run_tests                  # Run all test cases\n  \
    pypots-cli dev --run_tests --show_coverage  # Show code coverage after testing\n  \
    pypots-cli dev --run_tests -k imputation    # Only run tests of imputation models\n  \
    pypots-cli dev --lint_code                  # Reformat with Black and lint with Flake8\n  \
    pypots-cli dev --cleanup                    # Delete all caches and building files")]
pub struct CliArgs {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: CliSubCommands,
}

/// Subcommands and their arguments
#[derive(Subcommand, Debug)]
pub enum CliSubCommands {
    /// CLI tools helping develop PyPOTS code
    Dev {
        /// Build PyPOTS into a wheel and package the source code into a
        /// .tar.gz file for distribution
        #[arg(long)]
        build: bool,

        /// Delete all caches and building files
        #[arg(long)]
        cleanup: bool,

        /// Run all test cases
        #[arg(long = "run_tests")]
        run_tests: bool,

        /// Only run tests matching the given substring expression (the -k
        /// option of pytest). Names are substring-matched against test names
        /// and their parent classes, e.g. -k 'test_method or test_other'
        #[arg(short = 'k', value_name = "PATTERN")]
        k: Option<String>,

        /// Show the code coverage report after running tests
        #[arg(long = "show_coverage")]
        show_coverage: bool,

        /// Run Black and Flake8 to lint code
        #[arg(long = "lint_code")]
        lint_code: bool,
    },
}
