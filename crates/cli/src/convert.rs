// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File adapters around parsing and rule generation.
//!
//! The input is read completely before parsing, and the output is written
//! once after all rules are generated.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::output;
use crate::parser::{self, IncludePattern};
use crate::rules::{self, Rule};

/// How to run a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Fail on malformed patterns instead of passing them through.
    pub strict: bool,
    /// Compare with the existing output instead of writing it.
    pub check: bool,
}

/// What a successful conversion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was written.
    Written { rules: usize },
    /// `check` mode: the output file already matches.
    UpToDate,
}

/// Read include patterns from a file.
pub fn read_include_file(path: &Path) -> Result<Vec<IncludePattern>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let patterns = parser::parse(&content);
    tracing::debug!("read {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

/// Write rendered rules to a file, replacing its content.
pub fn write_ignore_file(path: &Path, rules: &[Rule]) -> Result<()> {
    std::fs::write(path, output::render(rules)).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("wrote {} rules to {}", rules.len(), path.display());
    Ok(())
}

/// Returns true if the file at `path` holds exactly the rendered rules.
///
/// A missing or unreadable file counts as out of date.
pub fn is_up_to_date(path: &Path, rules: &[Rule]) -> bool {
    match std::fs::read_to_string(path) {
        Ok(existing) => existing == output::render(rules),
        Err(e) => {
            tracing::debug!("cannot read {} for comparison: {}", path.display(), e);
            false
        }
    }
}

/// Generate rules for patterns, honoring strict mode.
pub fn generate(patterns: &[IncludePattern], strict: bool) -> Result<Vec<Rule>> {
    if strict {
        return rules::generate_strict(patterns);
    }
    for pattern in patterns {
        if let Some(reason) = pattern.malformed_reason() {
            tracing::warn!("passing through malformed pattern '{}': {}", pattern, reason);
        }
    }
    Ok(rules::generate(patterns))
}

/// Convert an include file into an ignore file.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<Outcome> {
    let patterns = read_include_file(input)?;
    let rules = generate(&patterns, options.strict)?;

    if options.check {
        if is_up_to_date(output, &rules) {
            return Ok(Outcome::UpToDate);
        }
        return Err(Error::Stale {
            path: PathBuf::from(output),
        });
    }

    write_ignore_file(output, &rules)?;
    Ok(Outcome::Written { rules: rules.len() })
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
