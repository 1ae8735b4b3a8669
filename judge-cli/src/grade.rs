//! Grade command implementation for the judge CLI.

use std::io::Write;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use judge_core::{Direction, ErrorKind, Objective, ProblemFamily, Score, VerificationError};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::{file_is_file, read_text_within};
use crate::{
    ARG_FORMAT, ARG_MAX_INPUT_BYTES, ARG_PROBLEM, ARG_SUBMISSION, ARG_TESTCASE, CliError,
    DEFAULT_MAX_INPUT_BYTES, ENV_PROBLEM, ENV_SUBMISSION, ENV_TESTCASE,
};

/// CLI arguments for the `grade` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Grade a submission against a testcase. The problem family \
                 and input paths can come from CLI flags, configuration \
                 files, or environment variables. A rejected submission \
                 exits with status 1.",
    about = "Verify and score a submission"
)]
#[ortho_config(prefix = "JUDGE")]
pub(crate) struct GradeArgs {
    /// Problem family: knapsack, tsp, car_sequencing or warehouse_location.
    #[arg(long = ARG_PROBLEM, value_name = "family")]
    #[serde(default)]
    pub(crate) problem: Option<String>,
    /// Path to the testcase file.
    #[arg(long = ARG_TESTCASE, value_name = "path")]
    #[serde(default)]
    pub(crate) testcase: Option<Utf8PathBuf>,
    /// Path to the submission file.
    #[arg(long = ARG_SUBMISSION, value_name = "path")]
    #[serde(default)]
    pub(crate) submission: Option<Utf8PathBuf>,
    /// Verdict format: text (default) or json.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Refuse input files larger than this many bytes (default 64 MiB).
    #[arg(long = ARG_MAX_INPUT_BYTES, value_name = "bytes")]
    #[serde(default)]
    pub(crate) max_input_bytes: Option<u64>,
}

impl GradeArgs {
    pub(crate) fn into_config(self) -> Result<GradeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GradeConfig::try_from(merged)
    }
}

/// How the verdict is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format.trim() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnknownFormat {
                format: other.to_owned(),
            }),
        }
    }
}

/// Resolved `grade` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GradeConfig {
    pub(crate) problem: ProblemFamily,
    pub(crate) testcase: Utf8PathBuf,
    pub(crate) submission: Utf8PathBuf,
    pub(crate) format: OutputFormat,
    pub(crate) max_input_bytes: u64,
}

impl GradeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.testcase, ARG_TESTCASE)?;
        Self::require_existing(&self.submission, ARG_SUBMISSION)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<GradeArgs> for GradeConfig {
    type Error = CliError;

    fn try_from(args: GradeArgs) -> Result<Self, Self::Error> {
        let problem = args
            .problem
            .ok_or(CliError::MissingArgument {
                field: ARG_PROBLEM,
                env: ENV_PROBLEM,
            })?
            .parse::<ProblemFamily>()?;
        let testcase = args.testcase.ok_or(CliError::MissingArgument {
            field: ARG_TESTCASE,
            env: ENV_TESTCASE,
        })?;
        let submission = args.submission.ok_or(CliError::MissingArgument {
            field: ARG_SUBMISSION,
            env: ENV_SUBMISSION,
        })?;
        let format = args
            .format
            .as_deref()
            .map(OutputFormat::from_str)
            .transpose()?
            .unwrap_or_default();
        let max_input_bytes = args.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES);

        Ok(Self {
            problem,
            testcase,
            submission,
            format,
            max_input_bytes,
        })
    }
}

/// JSON shape of a verdict.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Verdict {
    Accepted {
        problem: ProblemFamily,
        score: Objective,
        direction: Direction,
    },
    Rejected {
        problem: ProblemFamily,
        kind: ErrorKind,
        message: String,
    },
}

impl Verdict {
    fn new(problem: ProblemFamily, outcome: &Result<Score, VerificationError>) -> Self {
        match outcome {
            Ok(score) => Self::Accepted {
                problem,
                score: score.value(),
                direction: score.direction(),
            },
            Err(err) => Self::Rejected {
                problem,
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

pub(crate) fn run_grade(args: GradeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_grade_config(args)?;
    grade_with_config(&config, writer)
}

/// Grade the configured files and write the verdict.
pub(crate) fn grade_with_config(
    config: &GradeConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let testcase = read_input(&config.testcase, ARG_TESTCASE, config.max_input_bytes)?;
    let submission = read_input(&config.submission, ARG_SUBMISSION, config.max_input_bytes)?;
    let outcome = judge_problems::evaluate(config.problem, &testcase, &submission);
    write_verdict(writer, config.format, config.problem, &outcome)?;
    outcome.map(|_| ()).map_err(|source| CliError::Rejected {
        problem: config.problem,
        source,
    })
}

fn resolve_grade_config(args: GradeArgs) -> Result<GradeConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load an input file, refusing anything over `limit` bytes.
pub(crate) fn read_input(
    path: &Utf8Path,
    field: &'static str,
    limit: u64,
) -> Result<String, CliError> {
    read_text_within(path, limit)
        .map_err(|source| CliError::ReadInput {
            field,
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| CliError::InputTooLarge {
            field,
            path: path.to_path_buf(),
            limit,
        })
}

fn write_verdict(
    writer: &mut dyn Write,
    format: OutputFormat,
    problem: ProblemFamily,
    outcome: &Result<Score, VerificationError>,
) -> Result<(), CliError> {
    let line = match (format, outcome) {
        (OutputFormat::Text, Ok(score)) => score.verdict(),
        // Text rejections are reported on stderr by the binary.
        (OutputFormat::Text, Err(_)) => return Ok(()),
        (OutputFormat::Json, _) => serde_json::to_string(&Verdict::new(problem, outcome))
            .map_err(CliError::SerializeVerdict)?,
    };
    writer
        .write_all(line.as_bytes())
        .map_err(CliError::WriteVerdict)?;
    writer.write_all(b"\n").map_err(CliError::WriteVerdict)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<GradeConfig, CliError> {
    let merged = GradeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    GradeConfig::try_from(merged)
}
