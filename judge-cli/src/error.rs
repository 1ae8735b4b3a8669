//! Error types emitted by the judge CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use judge_core::{ProblemFamily, UnknownProblemFamily, VerificationError};
use thiserror::Error;

/// Errors emitted by the judge CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The configured problem family is not supported.
    #[error(transparent)]
    UnknownProblem(#[from] UnknownProblemFamily),
    /// The configured output format is not supported.
    #[error("unknown output format {format:?}, expected \"text\" or \"json\"")]
    UnknownFormat { format: String },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An input file is larger than the configured ceiling.
    #[error("{field} file {path:?} exceeds the {limit} byte input limit")]
    InputTooLarge {
        field: &'static str,
        path: Utf8PathBuf,
        limit: u64,
    },
    /// Reading an input file failed, including invalid UTF-8.
    #[error("failed to read {field} file {path:?}: {source}")]
    ReadInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serializing the JSON verdict failed.
    #[error("failed to serialize verdict: {0}")]
    SerializeVerdict(#[source] serde_json::Error),
    /// Writing the verdict failed.
    #[error("failed to write verdict: {0}")]
    WriteVerdict(#[source] std::io::Error),
    /// The submission was graded and rejected.
    #[error("{problem} submission rejected: {source}")]
    Rejected {
        problem: ProblemFamily,
        #[source]
        source: VerificationError,
    },
}
