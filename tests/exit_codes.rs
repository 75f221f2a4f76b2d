//! Tests for exit codes and usage handling of the binary.
//!
//! None of these tests reach a real DNS server: they either fail argument
//! parsing or point the binary at a resolver utility that does not exist.

use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_domain_inspector");
const MISSING_DIG: &str = "/nonexistent/path/to/dig";

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("DOMAIN_INSPECTOR_DIG")
        .env_remove("DOMAIN_INSPECTOR_SERVER")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run domain_inspector binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Usage: domain_inspector <domain>"), "stdout: {out}");
    assert!(out.contains("Example: domain_inspector google.com"));
    assert!(!out.contains("---"), "no queries should run: {out}");
}

#[test]
fn test_two_arguments_prints_usage_and_exits_1() {
    let output = run(&["example.com", "example.org", "--dig-path", MISSING_DIG]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Usage:"), "stdout: {out}");
    // usage errors never reach the resolver, so no "not found" message either
    assert!(!stderr(&output).contains("command not found"));
}

#[test]
fn test_non_numeric_concurrency_is_a_usage_error() {
    let output = run(&["--max-concurrency", "abc", "--dig-path", MISSING_DIG, "example.com"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Usage: domain_inspector <domain>"), "stdout: {out}");
    assert!(out.contains("invalid value 'abc'"), "clap's reason should follow: {out}");
    assert!(!out.contains("---"), "no queries should run: {out}");
    assert!(!stderr(&output).contains("command not found"));
}

#[test]
fn test_option_without_value_is_a_usage_error() {
    let output = run(&["--dig-path", MISSING_DIG, "example.com", "--server"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Usage: domain_inspector <domain>"), "stdout: {out}");
    assert!(out.contains("--server"), "stdout: {out}");
    assert!(!out.contains("---"), "no queries should run: {out}");
}

#[test]
fn test_unknown_color_is_a_usage_error() {
    let output = run(&["--color", "rainbow", "example.com"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_version_exits_0() {
    let output = run(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("domain_inspector"));
}

#[test]
fn test_missing_resolver_utility_exits_1_without_sections() {
    let output = run(&["--color", "never", "--dig-path", MISSING_DIG, "example.com"]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(
        err.contains(&format!("Error: '{MISSING_DIG}' command not found")),
        "stderr: {err}"
    );
    let out = stdout(&output);
    assert!(!out.contains("---"), "no section header may be printed: {out}");
}

#[test]
fn test_missing_resolver_utility_from_environment() {
    let output = Command::new(BIN)
        .arg("example.com")
        .env("DOMAIN_INSPECTOR_DIG", MISSING_DIG)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run domain_inspector binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("command not found"));
}

#[test]
fn test_invalid_concurrency_is_rejected_before_queries() {
    let output = run(&["--max-concurrency", "0", "--dig-path", MISSING_DIG, "example.com"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("max_concurrency"), "stderr: {err}");
    assert!(!err.contains("command not found"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_help_exits_0() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("--server"));
    assert!(out.contains("--dig-path"));
}
