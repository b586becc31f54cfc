//! Integration test: validate report files on disk, end to end through
//! `validate_report_file` — file read, JSON parse, validator build, and
//! sorted violation reporting.

use std::path::{Path, PathBuf};

use benchreport_schema::{validate_report_file, ReportValidationError};

const REPORT_SCHEMA: &str = r#"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "type": "object",
    "required": ["suite", "results"],
    "properties": {
        "suite": {"type": "string"},
        "results": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["name", "p50_us", "p99_us"],
                "properties": {
                    "name": {"type": "string"},
                    "p50_us": {"type": "number", "minimum": 0},
                    "p99_us": {"type": "number", "minimum": 0}
                }
            }
        }
    }
}"#;

fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn test_conforming_report_passes() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_fixture(dir.path(), "report.schema.json", REPORT_SCHEMA);
    let report = write_fixture(
        dir.path(),
        "report.json",
        r#"{
            "suite": "redis-latency",
            "results": [
                {"name": "GET", "p50_us": 41.5, "p99_us": 112.0},
                {"name": "SET", "p50_us": 44.0, "p99_us": 120.5}
            ]
        }"#,
    );

    validate_report_file(&schema, &report).unwrap();
}

#[test]
fn test_violations_reported_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_fixture(dir.path(), "report.schema.json", REPORT_SCHEMA);
    // Two violations in reverse document order: /suite and /results/1/p99_us.
    let report = write_fixture(
        dir.path(),
        "report.json",
        r#"{
            "suite": 7,
            "results": [
                {"name": "GET", "p50_us": 41.5, "p99_us": 112.0},
                {"name": "SET", "p50_us": 44.0, "p99_us": "slow"}
            ]
        }"#,
    );

    let err = validate_report_file(&schema, &report).unwrap_err();
    match &err {
        ReportValidationError::ValidationFailed { violations, .. } => {
            let pointers: Vec<&str> =
                violations.violations().iter().map(|v| v.pointer()).collect();
            assert_eq!(pointers, vec!["/results/1/p99_us", "/suite"]);
        }
        other => panic!("Expected ValidationFailed, got: {other}"),
    }
}

#[test]
fn test_missing_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_fixture(dir.path(), "report.json", "{}");
    let missing = dir.path().join("no-such-schema.json");

    let err = validate_report_file(&missing, &report).unwrap_err();
    assert!(
        matches!(err, ReportValidationError::FileAccess { .. }),
        "Expected FileAccess, got: {err}"
    );
    assert!(err.to_string().contains("no-such-schema.json"));
}

#[test]
fn test_malformed_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_fixture(dir.path(), "report.schema.json", "{}");
    let report = write_fixture(dir.path(), "report.json", r#"{"suite": "latency",}"#);

    let err = validate_report_file(&schema, &report).unwrap_err();
    match &err {
        ReportValidationError::Parse { path, .. } => {
            assert!(path.contains("report.json"));
        }
        other => panic!("Expected Parse, got: {other}"),
    }
}
