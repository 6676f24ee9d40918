// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The linear gate pipeline.
//!
//! Run the instrumented test suite, render the coverage summary,
//! extract the total percentage, compare against the threshold. Each
//! stage blocks until its subprocess finishes, and any failure is
//! terminal: a non-zero stage exit propagates as-is, everything else
//! exits 1.

use std::io::Write;

use regex::Regex;

use crate::config::Config;
use crate::coverage;
use crate::error::{GateError, Stage};
use crate::logs::{self, LogMode};
use crate::paths::ReportPaths;
use crate::process::{CommandRunner, ProcessOutput};

/// Program both stages invoke.
const GO: &str = "go";

/// Everything a gate run needs, constructed once at startup.
pub struct Gate<'a, R: CommandRunner> {
    config: &'a Config,
    paths: &'a ReportPaths,
    pattern: &'a Regex,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Gate<'a, R> {
    pub fn new(
        config: &'a Config,
        paths: &'a ReportPaths,
        pattern: &'a Regex,
        runner: &'a R,
    ) -> Self {
        Self {
            config,
            paths,
            pattern,
            runner,
        }
    }

    /// Run the full pipeline, mirroring subprocess output to `stdout`
    /// and `stderr` in addition to the log files.
    ///
    /// Returns the extracted total coverage when the gate passes. The
    /// caller maps any error to a process exit code.
    pub fn run(&self, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<f64, GateError> {
        let required = self.config.testing.coverage_required;
        writeln!(stdout, "COVERAGE REQUIRED: {required}").map_err(GateError::stream)?;

        std::fs::create_dir_all(self.paths.dir()).map_err(|source| GateError::WriteLog {
            path: self.paths.dir().to_path_buf(),
            source,
        })?;

        self.run_stage(Stage::Tests, &self.test_args(), LogMode::Overwrite, stdout, stderr)?;
        let summary = self.run_stage(
            Stage::Summary,
            &self.summary_args(),
            LogMode::Append,
            stdout,
            stderr,
        )?;

        let total = coverage::extract_total(self.pattern, &summary.stdout)?;
        tracing::debug!(total, required, "extracted total coverage");

        if total < required {
            return Err(GateError::BelowThreshold {
                actual: total,
                required,
            });
        }

        writeln!(stderr, "Coverage {total}% passes requirement of {required}%")
            .map_err(GateError::stream)?;
        Ok(total)
    }

    /// Run one external command, mirror and persist its output, and
    /// fail on a non-zero exit.
    ///
    /// Output is mirrored and logged before the status check so the
    /// logs are complete even for failing stages.
    fn run_stage(
        &self,
        stage: Stage,
        args: &[String],
        mode: LogMode,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ProcessOutput, GateError> {
        tracing::debug!(%stage, ?args, "running stage");
        let output = self.runner.run(GO, args)?;

        stdout
            .write_all(output.stdout.as_bytes())
            .map_err(GateError::stream)?;
        stderr
            .write_all(output.stderr.as_bytes())
            .map_err(GateError::stream)?;
        logs::record(self.paths, &output, mode)?;

        if !output.success() {
            return Err(GateError::ToolFailed {
                stage,
                code: output.code,
            });
        }
        Ok(output)
    }

    fn test_args(&self) -> Vec<String> {
        vec![
            "test".to_string(),
            "-v".to_string(),
            "-failfast".to_string(),
            "-covermode=count".to_string(),
            format!("-coverprofile={}", self.paths.coverage_profile.display()),
            "-coverpkg=./...".to_string(),
            "./...".to_string(),
        ]
    }

    fn summary_args(&self) -> Vec<String> {
        vec![
            "tool".to_string(),
            "cover".to_string(),
            "--func".to_string(),
            self.paths.coverage_profile.display().to_string(),
        ]
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
