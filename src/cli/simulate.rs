//! Simulate command implementation

use std::path::Path;

use anyhow::Result;
use tracing::info;

use callsift::capture::{self, CallLog};
use callsift::scanner::Scanner;
use callsift::simulate::demo_session;

use super::report::print_report;

/// Generate the synthetic demo session, log it, scan it, write the report
pub async fn simulate_command(work_dir: &Path, config_file: Option<&Path>) -> Result<()> {
    let config = super::scan::load_config(work_dir, config_file)?;

    println!("Simulating intercepted API calls...\n");

    let records = demo_session();
    let log_dir = work_dir.join(&config.settings.log_dir);
    let log = CallLog::new(&log_dir);
    let log_path = log.append_all(&records)?;
    info!(log = %log_path.display(), records = records.len(), "demo session logged");

    let scanner = Scanner::with_default_rules();
    let report = scanner.scan(&records);

    print_report(&report);

    let report_dir = work_dir.join(&config.settings.report_dir);
    let report_path = capture::write_report(&report_dir, &report, config.settings.pretty_report)?;
    println!("Full report saved to: {}", report_path.display());

    Ok(())
}
