//! Focused unit tests covering grade CLI configuration, input limits and
//! verdict rendering.

use super::helpers::Workspace;
use super::*;
use camino::Utf8PathBuf;
use clap::Parser;
use crate::grade::{
    GradeArgs, GradeConfig, OutputFormat, config_from_layers_for_test, grade_with_config,
    read_input,
};
use judge_core::{ErrorKind, ProblemFamily};
use rstest::rstest;
use serde_json::Value;

fn complete_args() -> GradeArgs {
    GradeArgs {
        problem: Some("knapsack".to_owned()),
        testcase: Some("testcase.txt".into()),
        submission: Some("submission.txt".into()),
        ..GradeArgs::default()
    }
}

#[rstest]
fn parses_grade_flags() {
    let cli = Cli::try_parse_from([
        "judge",
        "grade",
        "--problem",
        "tsp",
        "--testcase",
        "case.txt",
        "--submission",
        "answer.txt",
        "--format",
        "json",
        "--max-input-bytes",
        "1024",
    ])
    .expect("flags should parse");
    let Command::Grade(args) = cli.command;
    assert_eq!(args.problem.as_deref(), Some("tsp"));
    assert_eq!(args.testcase, Some(Utf8PathBuf::from("case.txt")));
    assert_eq!(args.format.as_deref(), Some("json"));
    assert_eq!(args.max_input_bytes, Some(1024));
}

#[rstest]
#[case::missing_problem(ARG_PROBLEM, ENV_PROBLEM)]
#[case::missing_testcase(ARG_TESTCASE, ENV_TESTCASE)]
#[case::missing_submission(ARG_SUBMISSION, ENV_SUBMISSION)]
fn converting_without_required_fields_errors(
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let mut args = complete_args();
    match field {
        ARG_PROBLEM => args.problem = None,
        ARG_TESTCASE => args.testcase = None,
        _ => args.submission = None,
    }
    let err = GradeConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_defaults() {
    let config = GradeConfig::try_from(complete_args()).expect("config should build");
    assert_eq!(config.problem, ProblemFamily::Knapsack);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
}

#[rstest]
fn unknown_problem_families_are_rejected() {
    let args = GradeArgs {
        problem: Some("sudoku".to_owned()),
        ..complete_args()
    };
    let err = GradeConfig::try_from(args).expect_err("unknown family");
    match err {
        CliError::UnknownProblem(unknown) => assert_eq!(unknown.name, "sudoku"),
        other => panic!("expected UnknownProblem, found {other:?}"),
    }
}

#[rstest]
fn unknown_formats_are_rejected() {
    let args = GradeArgs {
        format: Some("yaml".to_owned()),
        ..complete_args()
    };
    let err = GradeConfig::try_from(args).expect_err("unknown format");
    match err {
        CliError::UnknownFormat { format } => assert_eq!(format, "yaml"),
        other => panic!("expected UnknownFormat, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_and_non_file_inputs() {
    let workspace = Workspace::new();
    let mut config = workspace.knapsack_config("30\n1 2\n", OutputFormat::Text);
    config.validate_sources().expect("both inputs exist");

    config.submission = workspace.path("absent.txt");
    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_SUBMISSION);
            assert_eq!(path, config.submission);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }

    config.testcase = workspace.path("nested");
    std::fs::create_dir(&config.testcase).expect("create directory");
    match config.validate_sources() {
        Err(CliError::SourcePathNotFile { field, .. }) => assert_eq!(field, ARG_TESTCASE),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
#[case(8, true)]
#[case(7, false)]
fn read_input_enforces_the_byte_ceiling(#[case] limit: u64, #[case] accepted: bool) {
    let workspace = Workspace::new();
    let path = workspace.write("eight.txt", "1234567\n");
    match read_input(&path, ARG_TESTCASE, limit) {
        Ok(text) => {
            assert!(accepted, "limit {limit} should refuse the file");
            assert_eq!(text, "1234567\n");
        }
        Err(CliError::InputTooLarge { field, limit: l, .. }) => {
            assert!(!accepted, "limit {limit} should accept the file");
            assert_eq!((field, l), (ARG_TESTCASE, limit));
        }
        Err(other) => panic!("expected InputTooLarge, found {other:?}"),
    }
}

#[rstest]
fn read_input_rejects_invalid_utf8() {
    let workspace = Workspace::new();
    let path = workspace.write("binary.txt", [0xff_u8, 0xfe, 0x00]);
    match read_input(&path, ARG_SUBMISSION, DEFAULT_MAX_INPUT_BYTES) {
        Err(CliError::ReadInput { field, source, .. }) => {
            assert_eq!(field, ARG_SUBMISSION);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected ReadInput, found {other:?}"),
    }
}

#[rstest]
fn text_verdict_prints_the_summary_line() {
    let workspace = Workspace::new();
    let config = workspace.knapsack_config("30\n1 2\n", OutputFormat::Text);
    let mut output = Vec::new();
    grade_with_config(&config, &mut output).expect("accepted");
    assert_eq!(String::from_utf8(output).expect("utf-8"), "Total profit: 30\n");
}

#[rstest]
fn text_rejection_writes_nothing_and_errors() {
    let workspace = Workspace::new();
    let config = workspace.knapsack_config("45\n1 2 3\n", OutputFormat::Text);
    let mut output = Vec::new();
    let err = grade_with_config(&config, &mut output).expect_err("overweight");
    assert!(output.is_empty());
    match err {
        CliError::Rejected { problem, source } => {
            assert_eq!(problem, ProblemFamily::Knapsack);
            assert_eq!(source.kind(), ErrorKind::Feasibility);
        }
        other => panic!("expected Rejected, found {other:?}"),
    }
}

#[rstest]
fn json_verdict_reports_score_and_direction() {
    let workspace = Workspace::new();
    let config = workspace.knapsack_config("30\n1 2\n", OutputFormat::Json);
    let mut output = Vec::new();
    grade_with_config(&config, &mut output).expect("accepted");
    let verdict: Value = serde_json::from_slice(&output).expect("json verdict");
    assert_eq!(
        verdict,
        serde_json::json!({
            "status": "accepted",
            "problem": "knapsack",
            "score": 30,
            "direction": "maximize",
        })
    );
}

#[rstest]
fn json_rejection_is_written_before_erroring() {
    let workspace = Workspace::new();
    let config = workspace.knapsack_config("31\n1 2\n", OutputFormat::Json);
    let mut output = Vec::new();
    let err = grade_with_config(&config, &mut output).expect_err("wrong claim");
    assert!(matches!(err, CliError::Rejected { .. }));
    let verdict: Value = serde_json::from_slice(&output).expect("json verdict");
    assert_eq!(verdict["status"], "rejected");
    assert_eq!(verdict["problem"], "knapsack");
    assert_eq!(verdict["kind"], "consistency");
    assert_eq!(
        verdict["message"],
        "wrong profit reported: got 31, actual 30"
    );
}

#[rstest]
fn malformed_testcases_are_parse_rejections() {
    let workspace = Workspace::new();
    let mut config = workspace.knapsack_config("30\n1 2\n", OutputFormat::Json);
    config.testcase = workspace.write("short.txt", "3 10\n10 5\n");
    let mut output = Vec::new();
    grade_with_config(&config, &mut output).expect_err("truncated testcase");
    let verdict: Value = serde_json::from_slice(&output).expect("json verdict");
    assert_eq!(verdict["kind"], "parse");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "max_input_bytes": "lots" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "problem": "tsp",
            "testcase": "from-file/testcase.txt",
            "max_input_bytes": 4096,
        }),
        None,
    );
    composer.push_environment(json!({
        "submission": "from-env/submission.txt",
        "format": "json",
    }));
    composer.push_cli(json!({ "problem": "warehouse_location" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.problem, ProblemFamily::WarehouseLocation);
    assert_eq!(config.testcase, "from-file/testcase.txt");
    assert_eq!(config.submission, "from-env/submission.txt");
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.max_input_bytes, 4096);
}
