//! Command-line interface for grading submissions against local testcases.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod files;
mod grade;

pub use error::CliError;
use grade::GradeArgs;

pub(crate) const ARG_PROBLEM: &str = "problem";
pub(crate) const ARG_TESTCASE: &str = "testcase";
pub(crate) const ARG_SUBMISSION: &str = "submission";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_MAX_INPUT_BYTES: &str = "max-input-bytes";
pub(crate) const ENV_PROBLEM: &str = "JUDGE_CMDS_GRADE_PROBLEM";
pub(crate) const ENV_TESTCASE: &str = "JUDGE_CMDS_GRADE_TESTCASE";
pub(crate) const ENV_SUBMISSION: &str = "JUDGE_CMDS_GRADE_SUBMISSION";

/// Largest testcase or submission file read unless configured otherwise.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 64 * 1024 * 1024;

/// Run the judge CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError::Rejected`] when the submission fails verification,
/// after the verdict has been written to stdout in JSON mode.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Grade(args) => {
            let mut stdout = std::io::stdout().lock();
            grade::run_grade(args, &mut stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "judge",
    about = "Verify and score optimisation problem submissions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Grade one submission file against one testcase file.
    Grade(GradeArgs),
}

#[cfg(test)]
mod tests;
