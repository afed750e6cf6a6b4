// CLI integration tests: run the binary against snapshot-style fixture files.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_exprline");
    Command::new(exe)
}

fn fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn run(args: &[&str]) -> Output {
    cmd().env_remove("RUST_LOG").args(args).output().expect("run exprline")
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr_error(output: &Output) -> Value {
    let text = String::from_utf8_lossy(&output.stderr);
    let line = text.lines().last().expect("stderr line");
    let value: Value = serde_json::from_str(line).expect("json error on stderr");
    value.get("error").cloned().expect("error object")
}

#[test]
fn prints_string_expression_bare() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(
        temp.path(),
        "greeting.snap",
        "---\nsource: src/lib.rs\nexpression: \"hello\"\n---\nbody\n",
    );

    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_text(&output), "hello\n");
}

#[test]
fn prints_number_expression() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "n.snap", "a\nb\nexpression: 42\n");

    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_text(&output), "42\n");
}

#[test]
fn two_line_file_fails_with_exact_message() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "short.snap", "a\nexpression: 1\n");

    let output = run(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(6));
    assert!(output.stdout.is_empty());
    let err = stderr_error(&output);
    assert_eq!(err["kind"], "Invalid");
    assert_eq!(err["message"], "File has less than 3 lines");
}

#[test]
fn wrong_prefix_fails_with_exact_message() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "bad.snap", "a\nb\nnot the right prefix\nd\n");

    let output = run(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(6));
    assert!(output.stdout.is_empty());
    let err = stderr_error(&output);
    assert_eq!(
        err["message"],
        "Third line does not start with 'expression: '"
    );
    assert_eq!(err["line"], 3);
}

#[test]
fn invalid_json_fails_without_stdout() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "broken.snap", "a\nb\nexpression: {invalid json\n");

    let output = run(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(7));
    assert!(output.stdout.is_empty());
    let err = stderr_error(&output);
    assert_eq!(err["kind"], "Decode");
    assert!(err["message"].as_str().unwrap().contains("line 1 column"));
    assert!(err["hint"].as_str().unwrap().contains("parse category: syntax"));
}

#[test]
fn missing_file_is_not_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("absent.snap");

    let output = run(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let err = stderr_error(&output);
    assert_eq!(err["kind"], "NotFound");
    assert_eq!(err["path"], path.display().to_string());
}

#[test]
fn repeated_runs_are_identical() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "same.snap", "a\nb\nexpression: [1, \"two\", null]\n");
    let before = fs::read(&path).expect("read fixture");

    let first = run(&[path.to_str().unwrap()]);
    let second = run(&[path.to_str().unwrap()]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout_text(&first), "[1,\"two\",null]\n");
    assert_eq!(fs::read(&path).expect("read fixture"), before);
}

#[test]
fn extra_blank_line_does_not_change_output() {
    let temp = tempfile::tempdir().expect("tempdir");
    let plain = fixture(temp.path(), "plain.snap", "a\nb\nexpression: \"x\"\n");
    let padded = fixture(temp.path(), "padded.snap", "a\nb\nexpression: \"x\"\n\n");

    let plain_out = run(&[plain.to_str().unwrap()]);
    let padded_out = run(&[padded.to_str().unwrap()]);
    assert_eq!(stdout_text(&plain_out), "x\n");
    assert_eq!(plain_out.stdout, padded_out.stdout);
}

#[test]
fn json_and_pretty_formats() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "obj.snap", "a\nb\nexpression: {\"b\": 1, \"a\": \"s\"}\n");

    let json = run(&["--format", "json", path.to_str().unwrap()]);
    assert!(json.status.success());
    assert_eq!(stdout_text(&json), "{\"b\":1,\"a\":\"s\"}\n");

    let string = fixture(temp.path(), "str.snap", "a\nb\nexpression: \"hello\"\n");
    let quoted = run(&["--format", "json", string.to_str().unwrap()]);
    assert_eq!(stdout_text(&quoted), "\"hello\"\n");

    let pretty = run(&["--format", "pretty", "--color", "never", path.to_str().unwrap()]);
    assert!(pretty.status.success());
    assert_eq!(stdout_text(&pretty), "{\n  \"b\": 1,\n  \"a\": \"s\"\n}\n");
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "log.snap", "a\nb\nexpression: true\n");

    let output = cmd()
        .env("RUST_LOG", "debug")
        .arg(path.to_str().unwrap())
        .output()
        .expect("run exprline");
    assert!(output.status.success());
    assert_eq!(stdout_text(&output), "true\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("decoded expression"));
}

#[test]
fn missing_path_is_a_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr_error(&output);
    assert_eq!(err["kind"], "Usage");
}

#[test]
fn completions_print_without_a_path() {
    let output = run(&["--completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("exprline"));
}

#[test]
fn big_numbers_print_exactly() {
    let temp = tempfile::tempdir().expect("tempdir");
    for literal in ["12345678901234567890123", "1e400"] {
        let path = fixture(temp.path(), "num.snap", &format!("a\nb\nexpression: {literal}\n"));
        let output = run(&[path.to_str().unwrap()]);
        assert!(output.status.success(), "literal {literal}");
        assert_eq!(stdout_text(&output), format!("{literal}\n"));
    }
}

#[test]
fn non_finite_literals_fail_to_decode() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = fixture(temp.path(), "nan.snap", "a\nb\nexpression: NaN\n");
    let output = run(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(7));
    assert!(output.stdout.is_empty());
}

#[test]
fn completions_reject_a_path() {
    let output = run(&["--completions", "bash", "some.snap"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
