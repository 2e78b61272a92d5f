//! Integration tests for the JSONL call log and report snapshots

mod common;

use std::fs;

use tempfile::TempDir;

use callsift::capture::{write_report, CallLog, CaptureError};
use callsift::scanner::Scanner;

use common::{clean_record, injected_record};

#[test]
fn test_log_then_scan_roundtrip() {
    let dir = TempDir::new().unwrap();
    let log = CallLog::new(dir.path());

    log.append(&clean_record("c1")).unwrap();
    log.append(&injected_record("c2")).unwrap();
    let path = log.append(&clean_record("c3")).unwrap();

    let records = CallLog::read_records(&path).unwrap();
    assert_eq!(records.len(), 3, "all appended records should read back");
    assert_eq!(records[1].call_id, "c2", "chronological order is preserved");

    let report = Scanner::with_default_rules().scan(&records);
    assert_eq!(report.total_calls, 3);
    assert!(report.total_indicators >= 4);
}

#[test]
fn test_latest_session_finds_appended_log() {
    let dir = TempDir::new().unwrap();
    let log = CallLog::new(dir.path());

    assert!(log.latest_session().unwrap().is_none());

    let path = log.append(&clean_record("c1")).unwrap();
    assert_eq!(log.latest_session().unwrap(), Some(path));
}

#[test]
fn test_malformed_log_is_an_error_not_a_panic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calls_20260101.jsonl");
    fs::write(&path, "{\"call_id\": 42}\n").unwrap();

    let err = CallLog::read_records(&path).unwrap_err();
    assert!(
        matches!(err, CaptureError::MalformedRecord { line: 1, .. }),
        "got unexpected error: {err}"
    );
}

#[test]
fn test_report_snapshot_shape() {
    let dir = TempDir::new().unwrap();
    let report = Scanner::with_default_rules().scan(&[injected_record("c1")]);

    let path = write_report(dir.path(), &report, true).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value["total_calls"], 1);
    assert_eq!(
        value["confidence_counts"]["HIGH"].as_u64().unwrap()
            + value["confidence_counts"]["MEDIUM"].as_u64().unwrap()
            + value["confidence_counts"]["LOW"].as_u64().unwrap(),
        value["total_indicators"].as_u64().unwrap()
    );
    assert!(value["matches_by_category"]["banner-formatting"].is_array());
    assert!(value["recommendations"].is_array());
    assert!(
        value.get("timestamp").is_none() && value.get("generated_at").is_none(),
        "report body must not carry wall-clock data"
    );
}

#[test]
fn test_compact_report_snapshot() {
    let dir = TempDir::new().unwrap();
    let report = Scanner::with_default_rules().scan(&[clean_record("c1")]);

    let path = write_report(dir.path(), &report, false).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1, "compact report is a single line");
}
