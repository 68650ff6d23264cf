// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::env::names;

/// Converts include patterns to .ignore format
#[derive(Parser, Debug)]
#[command(name = "include-to-ignore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file with include patterns
    #[arg(
        short = 'i',
        long = "in",
        value_name = "FILE",
        env = names::INCLUDE_TO_IGNORE_IN
    )]
    pub input: PathBuf,

    /// Output .ignore file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        env = names::INCLUDE_TO_IGNORE_OUT
    )]
    pub output: PathBuf,

    /// Reject malformed patterns (empty, `.` or `..` segments)
    #[arg(long)]
    pub strict: bool,

    /// Verify the output file is up to date without writing it
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
