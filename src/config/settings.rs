//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory call logs are appended to
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Directory report snapshots are written to
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Pretty-print report JSON (reports are read by humans more often
    /// than machines)
    #[serde(default = "default_pretty_report")]
    pub pretty_report: bool,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("interception_logs")
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("interception_logs")
}

fn default_pretty_report() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            report_dir: default_report_dir(),
            pretty_report: default_pretty_report(),
        }
    }
}
