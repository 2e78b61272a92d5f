//! Scan command implementation

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use callsift::capture::{self, CallLog};
use callsift::config::Config;
use callsift::scanner::Scanner;

use super::report::print_report;

/// Load config from an explicit file when given, the working directory
/// otherwise
pub(crate) fn load_config(work_dir: &Path, config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => Config::from_file(path),
        None => Ok(Config::from_dir(work_dir).unwrap_or_default()),
    }
}

/// Scan a JSONL call log and write the report snapshot
pub async fn scan_command(
    work_dir: &Path,
    config_file: Option<&Path>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(work_dir, config_file)?;
    let log_dir = work_dir.join(&config.settings.log_dir);

    let log_path = match log_file {
        Some(path) => path,
        None => {
            let log = CallLog::new(&log_dir);
            match log.latest_session()? {
                Some(path) => path,
                None => bail!(
                    "No call logs found in {}. Run `callsift simulate` first or pass --log.",
                    log_dir.display()
                ),
            }
        }
    };

    let records = CallLog::read_records(&log_path)
        .with_context(|| format!("Failed to read call log: {}", log_path.display()))?;
    info!(log = %log_path.display(), records = records.len(), "scanning call log");

    let scanner = Scanner::with_default_rules();
    let report = scanner.scan(&records);

    print_report(&report);

    let report_dir = work_dir.join(&config.settings.report_dir);
    let report_path = capture::write_report(&report_dir, &report, config.settings.pretty_report)?;
    println!("Full report saved to: {}", report_path.display());

    Ok(())
}
