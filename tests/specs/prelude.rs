//! Test helpers for behavioral specifications.
//!
//! Provides a high-level DSL: a temp project with a settings file and a
//! scripted `go` toolchain stub that shadows the real one on PATH.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the covgate binary
pub fn covgate_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("covgate"))
}

/// Scripted behavior for the fake `go` binary.
///
/// `go test ...` replays the `test_*` fields, `go tool cover ...` the
/// `cover_*` fields.
pub struct GoStub {
    pub test_stdout: String,
    pub test_stderr: String,
    pub test_exit: i32,
    pub cover_stdout: String,
    pub cover_stderr: String,
    pub cover_exit: i32,
}

impl Default for GoStub {
    fn default() -> Self {
        Self {
            test_stdout: "=== RUN   TestPredict\n--- PASS: TestPredict (0.00s)\nPASS\n"
                .to_string(),
            test_stderr: String::new(),
            test_exit: 0,
            cover_stdout: "total:\t(statements)\t92.2%\n".to_string(),
            cover_stderr: String::new(),
            cover_exit: 0,
        }
    }
}

impl GoStub {
    /// Both stages succeed; the summary reports `total`%.
    pub fn with_total(total: &str) -> Self {
        Self {
            cover_stdout: format!("total:\t(statements)\t{total}%\n"),
            ..Self::default()
        }
    }

    /// The test stage fails with `exit`.
    pub fn failing_tests(exit: i32) -> Self {
        Self {
            test_stdout: "--- FAIL: TestPredict (0.00s)\nFAIL\n".to_string(),
            test_stderr: "exit status 1\n".to_string(),
            test_exit: exit,
            ..Self::default()
        }
    }

    /// The summary stage fails with `exit`.
    pub fn failing_cover(exit: i32) -> Self {
        Self {
            cover_stdout: String::new(),
            cover_stderr: "cover: can't parse profile\n".to_string(),
            cover_exit: exit,
            ..Self::default()
        }
    }
}

/// A temp working directory the gate runs in.
pub struct Project {
    dir: TempDir,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `setup.cfg` with the given `coverage_required` value.
    pub fn threshold(&self, value: &str) -> &Self {
        self.file(
            "setup.cfg",
            &format!("[testing]\ncoverage_required = {value}\n"),
        )
    }

    /// Write a file relative to the project root.
    pub fn file(&self, rel: &str, contents: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
        self
    }

    /// Install the scripted `go` stub into `<root>/bin`.
    ///
    /// The stub replays its outputs from data files, so spec text never
    /// needs shell quoting.
    #[cfg(unix)]
    pub fn stub_go(&self, stub: &GoStub) -> &Self {
        use std::os::unix::fs::PermissionsExt;

        self.file("bin/data/test.out", &stub.test_stdout);
        self.file("bin/data/test.err", &stub.test_stderr);
        self.file("bin/data/cover.out", &stub.cover_stdout);
        self.file("bin/data/cover.err", &stub.cover_stderr);

        let script = r#"#!/bin/sh
here="$(cd "$(dirname "$0")" && pwd)"
case "$1" in
  test)
    cat "$here/data/test.out"
    cat "$here/data/test.err" >&2
    exit TEST_EXIT
    ;;
  tool)
    cat "$here/data/cover.out"
    cat "$here/data/cover.err" >&2
    exit COVER_EXIT
    ;;
esac
exit 64
"#
        .replace("TEST_EXIT", &stub.test_exit.to_string())
        .replace("COVER_EXIT", &stub.cover_exit.to_string());
        self.file("bin/go", &script);

        let go = self.dir.path().join("bin/go");
        let mut perms = std::fs::metadata(&go).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&go, perms).unwrap();
        self
    }

    /// Command ready to run against this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = covgate_cmd();
        cmd.current_dir(self.dir.path());
        // The stub bin directory shadows any real toolchain.
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut entries = vec![self.dir.path().join("bin")];
        entries.extend(std::env::split_paths(&path));
        cmd.env("PATH", std::env::join_paths(entries).unwrap());
        cmd
    }

    /// Read a report artifact relative to the project root.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }
}
