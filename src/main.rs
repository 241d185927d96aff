//! Crosswire - supervisor daemon entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use crosswire::cli::Cli;
use crosswire::config::Config;
use crosswire::shutdown;
use crosswire::supervisor::Supervisor;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Route SIGINT/SIGTERM into the stop flag before anything runs
    shutdown::install_signal_handlers().context("Failed to install signal handlers")?;

    let poll_interval = cli
        .poll_interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.supervisor.poll_interval());
    debug!(?poll_interval, "main: constructing supervisor");

    let supervisor = Supervisor::new(poll_interval);
    info!("Crosswire running. Send SIGINT or SIGTERM to stop.");

    let code = supervisor.run(shutdown::stop_flag());
    info!(code, "Crosswire stopped");

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
