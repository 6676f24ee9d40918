// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `covgate` binary entry point.
//!
//! Thin wrapper over the library: parse arguments, initialize tracing,
//! run the gate, map failures to exit codes.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use covgate::cli::Cli;
use covgate::config::{Config, DEFAULT_CONFIG_PATH};
use covgate::coverage;
use covgate::error::GateError;
use covgate::orchestrator::Gate;
use covgate::paths::ReportPaths;
use covgate::process::SystemRunner;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_silent() {
                eprintln!("{err}");
            }
            exit_code(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<f64, GateError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(&config_path)?;
    let paths = ReportPaths::default();
    let pattern = coverage::total_pattern();

    let stdout = io::stdout();
    let stderr = io::stderr();
    Gate::new(&config, &paths, &pattern, &SystemRunner)
        .run(&mut stdout.lock(), &mut stderr.lock())
}

/// Map an i32 exit code onto `ExitCode`, clamping out-of-range values
/// to the generic failure code.
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "covgate=debug" } else { "covgate=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
