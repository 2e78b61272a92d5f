use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "callsift")]
#[command(about = "Sift intercepted API call logs for injected announcement indicators")]
#[command(version)]
struct Cli {
    /// Path to the working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .callsift/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a call log for announcement indicators and write a report
    Scan {
        /// Call log to scan (defaults to the newest session log)
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Generate a synthetic demo session, log it and scan it
    Simulate,

    /// Initialize a new .callsift/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Scan { log }) => {
            cli::scan::scan_command(&work_dir, cli.config.as_deref(), log).await?;
        }
        Some(Commands::Simulate) => {
            cli::simulate::simulate_command(&work_dir, cli.config.as_deref()).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, force).await?;
        }
        None => {
            // Default: scan the newest session log
            cli::scan::scan_command(&work_dir, cli.config.as_deref(), None).await?;
        }
    }

    Ok(())
}
