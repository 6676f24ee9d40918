//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Runs the Go test suite with coverage and fails below the configured threshold
#[derive(Parser)]
#[command(name = "covgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(
        short = 'C',
        long = "config",
        env = "COVGATE_CONFIG",
        value_name = "PATH"
    )]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostic output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
