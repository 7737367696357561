//! Command-line interface for prompt-gauge
//!
//! A single command: count a prompt's tokens, compare against a limit and
//! print advice.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod analyze;
mod utils;

/// Token usage analysis and prompt optimization tool
#[derive(Parser)]
#[command(name = "prompt-gauge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: analyze::AnalyzeArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, replaces the level chosen from --verbose.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    analyze::run(cli.args)
}
