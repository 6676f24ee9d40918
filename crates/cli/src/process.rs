// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking subprocess invocation with captured output.

use std::process::Command;

use crate::error::GateError;

/// Captured result of one external command invocation.
///
/// Immutable after capture; the pipeline only reads from it.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code. A process terminated by a signal has no code and
    /// reports 1.
    pub code: i32,
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

impl ProcessOutput {
    /// True when the command exited with status zero.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Launches one external command and blocks until it finishes.
///
/// The seam lets unit tests drive the orchestrator with scripted
/// results instead of real processes.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, GateError>;
}

/// Runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, GateError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| GateError::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(ProcessOutput {
            code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
