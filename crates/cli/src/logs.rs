// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log artifact persistence.
//!
//! The test stage overwrites the stdout/stderr logs; the summary stage
//! appends. After a full run each log holds exactly the first stage's
//! stream followed by the second's, with no separator.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::GateError;
use crate::paths::ReportPaths;
use crate::process::ProcessOutput;

/// How a stage's output lands in the log files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Truncate and write (first stage).
    Overwrite,
    /// Append after existing content (second stage).
    Append,
}

/// Persist a stage's captured streams to the stdout/stderr logs.
pub fn record(paths: &ReportPaths, output: &ProcessOutput, mode: LogMode) -> Result<(), GateError> {
    write_log(&paths.stdout_log, &output.stdout, mode)?;
    write_log(&paths.stderr_log, &output.stderr, mode)
}

fn write_log(path: &Path, text: &str, mode: LogMode) -> Result<(), GateError> {
    let wrap = |source| GateError::WriteLog {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    match mode {
        LogMode::Overwrite => options.write(true).create(true).truncate(true),
        LogMode::Append => options.append(true).create(true),
    };

    let mut file = options.open(path).map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
