// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gate error taxonomy and exit-code mapping.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can terminate a gate run early.
///
/// Nothing here is recovered or retried; the binary maps each variant
/// to a process exit code via [`GateError::exit_code`].
#[derive(Debug, Error)]
pub enum GateError {
    /// The settings file could not be read.
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is malformed or is missing
    /// `[testing] coverage_required`.
    #[error("invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An external command could not be launched at all.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A log artifact could not be written.
    #[error("failed to write {path}: {source}")]
    WriteLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mirroring subprocess output to the gate's own streams failed.
    #[error("failed to write to output stream: {source}")]
    Stream {
        #[source]
        source: std::io::Error,
    },

    /// An external command exited with a non-zero status.
    #[error("{stage} exited with status {code}")]
    ToolFailed { stage: Stage, code: i32 },

    /// The summary output contained no total-coverage line.
    #[error("no `total: (statements)` percentage found in coverage summary")]
    CoverageNotFound,

    /// Total coverage came in below the configured threshold.
    #[error("Coverage {actual} is less than required {required}")]
    BelowThreshold { actual: f64, required: f64 },
}

/// The pipeline stage an external command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `go test` with coverage instrumentation.
    Tests,
    /// `go tool cover --func` over the coverage profile.
    Summary,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Tests => write!(f, "go test"),
            Stage::Summary => write!(f, "go tool cover"),
        }
    }
}

impl GateError {
    pub(crate) fn stream(source: std::io::Error) -> Self {
        GateError::Stream { source }
    }

    /// Process exit code for this failure.
    ///
    /// Tool failures propagate the subprocess's own exit code; every
    /// other failure exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::ToolFailed { code, .. } => *code,
            _ => 1,
        }
    }

    /// Whether the binary should skip printing this error.
    ///
    /// A failing tool already had its stdout/stderr mirrored to the
    /// gate's streams; repeating a summary line would only add noise.
    pub fn is_silent(&self) -> bool {
        matches!(self, GateError::ToolFailed { .. })
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
