//! Test helpers for writing grading inputs to a temporary workspace.

use super::*;
use crate::grade::{GradeConfig, OutputFormat};
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

pub(super) const KNAPSACK_TESTCASE: &str = "3 10\n10 5\n20 4\n15 6\n";

/// Temporary directory holding testcase and submission files.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> Utf8PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write input file");
        path
    }

    /// Write a knapsack testcase and `submission`, returning a config that
    /// grades them in `format`.
    pub(super) fn knapsack_config(&self, submission: &str, format: OutputFormat) -> GradeConfig {
        GradeConfig {
            problem: judge_core::ProblemFamily::Knapsack,
            testcase: self.write("testcase.txt", KNAPSACK_TESTCASE),
            submission: self.write("submission.txt", submission),
            format,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}
