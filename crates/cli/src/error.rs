// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// include-to-ignore error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file missing, unreadable, or not valid UTF-8
    #[error("cannot read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("cannot write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pattern rejected in strict mode.
    #[error("malformed pattern '{pattern}': {reason}")]
    MalformedPattern { pattern: String, reason: String },

    /// Output file differs from what would be generated.
    #[error("'{}' is out of date", .path.display())]
    Stale { path: PathBuf },
}

/// Result type using include-to-ignore Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Conversion succeeded
    Success = 0,
    /// Reading, writing, or checking the output failed
    Failed = 1,
    /// A pattern was rejected
    InvalidPattern = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InputRead { .. } | Error::OutputWrite { .. } => ExitCode::Failed,
            Error::Stale { .. } => ExitCode::Failed,
            Error::MalformedPattern { .. } => ExitCode::InvalidPattern,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
