use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

fn cli_exe() -> &'static str {
    env!("CARGO_BIN_EXE_c4-validate")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(cli_exe())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run c4-validate")
}

fn run_on(path: &Path, extra: &[&str]) -> Output {
    let path = path.to_str().expect("utf-8 path");
    let mut args = extra.to_vec();
    args.push(path);
    run(&args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_document(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("model.dsl");
    fs::write(&path, content).expect("write document");
    path
}

#[test]
fn clean_document_exits_zero() {
    let output = run_on(&fixture("banking.dsl"), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "C4 model DSL validation passed!\n");
}

#[test]
fn warnings_alone_exit_zero() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_document(&dir, "workspace \"Shop\" {\n    model {\n    }\n}\n");

    let output = run_on(&path, &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(text.contains("C4 Model DSL Validation Report for: Shop"));
    assert!(text.contains("WARNINGS (1):"));
    assert!(text.contains("Summary: 0 errors, 1 warnings, 0 info messages"));
    assert!(text.contains("Validation completed with warnings/info only."));
}

#[test]
fn errors_exit_one_after_printing_report() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_document(
        &dir,
        "workspace \"Shop\" {\n    model {\n        x = person\n    }\n    views {\n    }\n}\n",
    );

    let output = run_on(&path, &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("ERRORS (1):"));
    assert!(text.contains("  Line 3: Invalid person declaration syntax."));
    assert!(text.contains("    Context: x = person"));
    assert!(text.contains("Validation failed!"));
}

#[test]
fn missing_file_reports_single_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.dsl");

    let output = run_on(&path, &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("ERRORS (1):"));
    assert!(text.contains("Line 0: File not found: "));
    assert!(text.contains("Summary: 1 errors, 0 warnings, 0 info messages"));
}

#[test]
fn wrong_argument_count_prints_usage_to_stdout() {
    for args in [&[][..], &["a.dsl", "b.dsl"][..]] {
        let output = run(args);

        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert!(stdout(&output).contains("Usage:"), "args: {:?}", args);
    }
}

#[test]
fn json_format_reports_issues() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_document(
        &dir,
        "workspace \"Shop\" {\n    model {\n        a = person \"A\"\n        a -> b\n    }\n}\n",
    );

    let output = run_on(&path, &["--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let report: Value = serde_json::from_slice(&output.stdout).expect("parse JSON report");
    assert_eq!(report["workspace"], "Shop");
    assert_eq!(report["passed"], true);
    assert_eq!(report["summary"]["warnings"], 2);
    assert_eq!(report["issues"][1]["line"], 4);
    assert_eq!(
        report["issues"][1]["message"],
        "Destination element 'b' not defined before use"
    );
}

#[test]
fn cross_reference_flag_can_fail_a_run() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_document(
        &dir,
        "workspace \"Shop\" {\n    model {\n        a = person \"A\"\n        a -> b\n    }\n    views {\n    }\n}\n",
    );

    assert_eq!(run_on(&path, &[]).status.code(), Some(0));

    let output = run_on(&path, &["--cross-references"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Element 'b' is referenced by a relationship but never defined"));
}
