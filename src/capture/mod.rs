//! Capture store - JSONL call logs and JSON report snapshots
//!
//! One `CallRecord` is appended per line to a per-day session log, in
//! chronological order. Reports are written as single JSON documents with
//! a timestamped filename; the report struct itself carries no clock data.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::domain::{CallRecord, Report};

/// Error reading or writing captured data
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode record or report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("malformed record at {path}:{line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Append-only JSONL store for call records
pub struct CallLog {
    dir: PathBuf,
}

impl CallLog {
    /// Open (or create on first append) a call log under `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of today's session log file
    pub fn session_file(&self) -> PathBuf {
        self.dir
            .join(format!("calls_{}.jsonl", Utc::now().format("%Y%m%d")))
    }

    /// Append one record to today's session log
    pub fn append(&self, record: &CallRecord) -> Result<PathBuf, CaptureError> {
        // Encode before touching the file so a failed record leaves the
        // log untouched.
        let line = serde_json::to_string(record)?;

        fs::create_dir_all(&self.dir)?;
        let path = self.session_file();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", line)?;

        Ok(path)
    }

    /// Append a batch of records, stopping at the first failure
    pub fn append_all(&self, records: &[CallRecord]) -> Result<PathBuf, CaptureError> {
        let mut path = self.session_file();
        for record in records {
            path = self.append(record)?;
        }
        Ok(path)
    }

    /// The most recent session log in this directory, if any
    pub fn latest_session(&self) -> Result<Option<PathBuf>, CaptureError> {
        if !self.dir.exists() {
            return Ok(None);
        }

        let mut logs: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().and_then(|e| e.to_str()) == Some("jsonl")
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("calls_"))
            })
            .collect();

        // Filenames embed the date, so lexical order is chronological
        logs.sort();
        Ok(logs.pop())
    }

    /// Read every record from a session log file
    pub fn read_records(path: &Path) -> Result<Vec<CallRecord>, CaptureError> {
        let content = fs::read_to_string(path)?;
        let mut records = Vec::new();

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: CallRecord =
                serde_json::from_str(line).map_err(|source| CaptureError::MalformedRecord {
                    path: path.to_path_buf(),
                    line: i + 1,
                    source,
                })?;
            records.push(record);
        }

        Ok(records)
    }
}

/// Write a report snapshot under `dir` and return its path.
///
/// The report is encoded to a string first; an encoding failure leaves no
/// partial file behind.
pub fn write_report(dir: &Path, report: &Report, pretty: bool) -> Result<PathBuf, CaptureError> {
    let content = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    fs::create_dir_all(dir)?;
    let path = dir.join(format!(
        "report_{}.json",
        Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::write(&path, content)?;

    info!(path = %path.display(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::scanner::Scanner;
    use tempfile::TempDir;

    fn sample_record(call_id: &str) -> CallRecord {
        CallRecord::new(call_id, "claude-sonnet-4-20250514")
            .with_system_prompt("You are a helpful coding assistant.")
            .with_message(Role::User, "Hello")
            .with_response("Hi!")
    }

    #[test]
    fn test_append_and_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let log = CallLog::new(dir.path());

        log.append(&sample_record("a1")).unwrap();
        let path = log.append(&sample_record("a2")).unwrap();

        let records = CallLog::read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].call_id, "a1");
        assert_eq!(records[1].call_id, "a2");
        assert_eq!(records[0].messages[0].content, "Hello");
    }

    #[test]
    fn test_latest_session_empty_dir() {
        let dir = TempDir::new().unwrap();
        let log = CallLog::new(dir.path().join("missing"));
        assert!(log.latest_session().unwrap().is_none());
    }

    #[test]
    fn test_latest_session_picks_newest_date() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("calls_20250101.jsonl"), "").unwrap();
        fs::write(dir.path().join("calls_20260301.jsonl"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let log = CallLog::new(dir.path());
        let latest = log.latest_session().unwrap().unwrap();
        assert!(latest.ends_with("calls_20260301.jsonl"));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calls_20260101.jsonl");
        let good = serde_json::to_string(&sample_record("a1")).unwrap();
        fs::write(&path, format!("{good}\nnot json\n")).unwrap();

        let err = CallLog::read_records(&path).unwrap_err();
        assert!(matches!(err, CaptureError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calls_20260101.jsonl");
        let good = serde_json::to_string(&sample_record("a1")).unwrap();
        fs::write(&path, format!("\n{good}\n\n")).unwrap();

        let records = CallLog::read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_write_report_snapshot() {
        let dir = TempDir::new().unwrap();
        let report = Scanner::with_default_rules().scan(&[sample_record("a1")]);

        let path = write_report(dir.path(), &report, true).unwrap();
        assert!(path.exists());

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total_calls"], 1);
        assert!(value["confidence_counts"]["HIGH"].is_number());
        assert!(value["recommendations"].is_array());
    }
}
