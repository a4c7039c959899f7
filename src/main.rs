//! envguard
//!
//! Checks that every required environment variable is set before a service
//! is allowed to start, and prints the resolved configuration.

use clap::Parser;
use envguard::{
    load_dotenv, load_required,
    report::{ReportFormat, render},
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Fail-fast check for required environment variables
#[derive(Parser, Debug)]
#[command(name = "envguard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Env file to load before checking (defaults to the nearest .env)
    #[arg(short, long, env = "ENVGUARD_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Skip loading any env file
    #[arg(long, env = "ENVGUARD_NO_DOTENV", conflicts_with = "env_file")]
    no_dotenv: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ENVGUARD_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output format for the resolved configuration
    #[arg(long, env = "ENVGUARD_FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting envguard");

    if !args.no_dotenv {
        load_dotenv(args.env_file.as_deref())
            .inspect_err(|e| error!(error = %e, "Failed to load env file"))?;
    }

    let env = load_required()
        .inspect_err(|e| error!(error = %e, "Required environment is incomplete"))?;

    println!("{}", render(&env, args.format)?);

    Ok(())
}
