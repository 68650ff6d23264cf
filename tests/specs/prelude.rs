//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing include-to-ignore CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// The fixed header every generated file starts with.
pub const HEADER: &str = "# Generated from include patterns\n\
                          # Note: More specific rules override less specific ones\n\
                          \n";

/// Returns a Command configured to run the include-to-ignore binary
pub fn cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("include-to-ignore"));
    cmd.env_remove("INCLUDE_TO_IGNORE_IN")
        .env_remove("INCLUDE_TO_IGNORE_OUT")
        .env_remove("INCLUDE_TO_IGNORE_LOG");
    cmd
}

/// Create a conversion builder with the given include file content
pub fn convert(include: &str) -> ConvertBuilder {
    ConvertBuilder::new(include)
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// High-level conversion builder for fluent test assertions.
///
/// Writes the include file into a fresh temp directory and runs
/// `include-to-ignore --in include.txt --out .ignore` there unless another
/// output path is set.
pub struct ConvertBuilder {
    dir: TempDir,
    out: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl ConvertBuilder {
    fn new(include: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("include.txt"), include).unwrap();
        Self {
            dir,
            out: ".ignore".to_string(),
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Pre-populate the output file.
    pub fn existing_output(self, content: &str) -> Self {
        std::fs::write(self.dir.path().join(".ignore"), content).unwrap();
        self
    }

    /// Write to a different output path, relative to the temp directory
    pub fn out(mut self, path: &str) -> Self {
        self.out = path.to_string();
        self
    }

    /// Add extra arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn passes(self) -> RunAssert {
        let output = run_passes(self.command());
        RunAssert { output, dir: self.dir }
    }

    pub fn fails(self) -> RunAssert {
        let output = run_fails(self.command());
        RunAssert { output, dir: self.dir }
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let output = run_exits(self.command(), code);
        RunAssert { output, dir: self.dir }
    }

    fn command(&self) -> Command {
        let mut cmd = cmd();
        cmd.args(["--in", "include.txt", "--out", self.out.as_str()]);
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }
}

fn run_passes(mut cmd: Command) -> std::process::Output {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "expected conversion to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn run_fails(mut cmd: Command) -> std::process::Output {
    let output = cmd.output().expect("command should run");
    assert!(
        !output.status.success(),
        "expected conversion to fail, but it passed\nstdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    output
}

fn run_exits(mut cmd: Command, code: i32) -> std::process::Output {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Result of a conversion run, keeping its temp directory alive.
pub struct RunAssert {
    output: std::process::Output,
    dir: TempDir,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Content of the output file, if it exists
    pub fn ignore_file(&self) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(".ignore")).ok()
    }

    /// Assert the output file holds the header followed by `rules`
    pub fn rules_eq(self, rules: &[&str]) -> Self {
        let mut expected = HEADER.to_string();
        for rule in rules {
            expected.push_str(rule);
            expected.push('\n');
        }
        let actual = self.ignore_file().expect("output file should exist");
        similar_asserts::assert_eq!(actual, expected);
        self
    }

    /// Assert the output file equals `expected` exactly
    pub fn ignore_file_eq(self, expected: &str) -> Self {
        let actual = self.ignore_file().expect("output file should exist");
        similar_asserts::assert_eq!(actual, expected);
        self
    }

    /// Assert no output file was created
    pub fn no_ignore_file(self) -> Self {
        assert!(
            self.ignore_file().is_none(),
            "expected no output file, found:\n{}",
            self.ignore_file().unwrap_or_default()
        );
        self
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    ///
    /// ```ignore
    /// .stdout_has("Successfully")  // contains
    /// ```
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}
