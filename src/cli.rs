//! CLI definitions

use clap::Parser;
use std::path::PathBuf;

/// Crosswire - owner-wired service supervisor
#[derive(Debug, Parser)]
#[command(
    name = "crosswire",
    about = "Supervisor daemon that cross-wires two callback-driven services",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Override the stop-flag poll interval
    #[arg(long = "poll-interval-ms", value_name = "MS")]
    pub poll_interval_ms: Option<u64>,
}
