// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Total-coverage extraction from `go tool cover --func` output.

use regex::Regex;

use crate::error::GateError;

/// Matches the aggregate line, e.g. `total:  (statements)  85.3%`.
///
/// `go tool cover` always prints one decimal place.
pub const TOTAL_PATTERN: &str = r"total:\s+\(statements\)\s+(\d+\.\d)%";

/// Compile the total-coverage pattern.
///
/// Compiled once at startup and passed to the pipeline explicitly.
#[allow(clippy::expect_used)]
pub fn total_pattern() -> Regex {
    Regex::new(TOTAL_PATTERN).expect("valid regex pattern")
}

/// Extract the authoritative total coverage percentage from summary
/// text.
///
/// Summary tools emit a running total last, so the last match in
/// document order wins.
pub fn extract_total(pattern: &Regex, summary: &str) -> Result<f64, GateError> {
    let value = pattern
        .captures_iter(summary)
        .last()
        .and_then(|caps| caps.get(1))
        .ok_or(GateError::CoverageNotFound)?;
    value
        .as_str()
        .parse()
        .map_err(|_| GateError::CoverageNotFound)
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
