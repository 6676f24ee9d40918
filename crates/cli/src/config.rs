// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gate configuration loaded from the project settings file.

use std::path::Path;

use serde::Deserialize;

use crate::error::GateError;

/// Default settings file, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "setup.cfg";

/// Root of the settings file.
///
/// Only the `[testing]` section is read; unknown keys are ignored so
/// the file can carry settings for other tooling.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Settings for the test gate.
    pub testing: TestingConfig,
}

/// The `[testing]` section.
#[derive(Debug, Deserialize)]
pub struct TestingConfig {
    /// Minimum acceptable total statement coverage, in percent (0-100).
    pub coverage_required: f64,
}

impl Config {
    /// Load and parse the settings file at `path`.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let text = std::fs::read_to_string(path).map_err(|source| GateError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| GateError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
