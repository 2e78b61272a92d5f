//! End-to-end test of the simulate -> log -> scan -> report flow

use tempfile::TempDir;

use callsift::capture::{write_report, CallLog};
use callsift::domain::RuleCategory;
use callsift::scanner::Scanner;
use callsift::simulate::demo_session;

#[test]
fn test_demo_session_end_to_end() {
    let dir = TempDir::new().unwrap();
    let log = CallLog::new(dir.path().join("logs"));

    let session = demo_session();
    let log_path = log.append_all(&session).unwrap();

    let records = CallLog::read_records(&log_path).unwrap();
    assert_eq!(records.len(), 3);

    let report = Scanner::with_default_rules().scan(&records);

    // The injected system prompt and marked response must both be caught
    assert!(report.confidence_counts.high >= 2);
    assert!(!report.matches_in(RuleCategory::BannerFormatting).is_empty());
    assert!(!report.matches_in(RuleCategory::SystemMessageMarker).is_empty());
    assert!(!report.matches_in(RuleCategory::DateReference).is_empty());
    assert!(!report.matches_in(RuleCategory::VersionInfo).is_empty());

    // The clean exchange contributes nothing
    let clean_id = &session[0].call_id;
    assert!(
        report
            .matches_by_category
            .values()
            .flatten()
            .all(|m| &m.call_id != clean_id),
        "the benign exchange must not appear in any grouping"
    );

    let report_path = write_report(&dir.path().join("reports"), &report, true).unwrap();
    assert!(report_path.exists());
}

#[test]
fn test_demo_session_scan_is_stable_across_runs() {
    let session = demo_session();
    let scanner = Scanner::with_default_rules();

    let first = serde_json::to_string(&scanner.scan(&session)).unwrap();
    let second = serde_json::to_string(&scanner.scan(&session)).unwrap();
    assert_eq!(first, second);
}
