//! Init command implementation

use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

/// Default configuration content for callsift init
pub const DEFAULT_CONFIG: &str = r#"# callsift configuration
#
# Call logs are JSONL files (one record per line) appended by the capture
# layer; reports are single JSON snapshots written after each scan.
#
# Detection rules and recommendation thresholds are fixed and not
# configurable: the rule table is the contract of the report format.

[settings]
# Directory call logs are appended to
log_dir = "interception_logs"

# Directory report snapshots are written to
report_dir = "interception_logs"

# Pretty-print report JSON
pretty_report = true
"#;

/// Write a default .callsift/config.toml into the working directory
pub async fn init_command(work_dir: &Path, force: bool) -> Result<()> {
    let config_dir = work_dir.join(".callsift");
    let config_path = config_dir.join("config.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    info!(path = %config_path.display(), "config written");
    println!("Created {}", config_path.display());

    Ok(())
}
