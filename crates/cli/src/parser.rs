// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Include pattern parsing.
//!
//! Input is line oriented. Only lines starting with `+` are include
//! directives; everything else (blank lines, comments, prose) is skipped.

use std::fmt;

/// Marker that starts an include directive.
pub const INCLUDE_MARKER: char = '+';

/// A path to keep, using `/` as separator.
///
/// A leading `/` anchors the pattern at the root; without it the first
/// segment matches at any depth. A trailing `/` marks a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncludePattern(String);

/// An include pattern split into its named segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    /// Segments between the optional leading and trailing `/`.
    pub segments: Vec<&'a str>,
    pub is_absolute: bool,
    pub is_directory: bool,
}

impl IncludePattern {
    /// Create a pattern, normalizing `\` separators to `/`.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.contains('\\') {
            Self(pattern.replace('\\', "/"))
        } else {
            Self(pattern)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    pub fn is_directory(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Split into segments.
    ///
    /// The empty segments produced by a leading or trailing `/` are dropped
    /// and recorded as flags instead. Interior empty segments (`a//b`) are
    /// kept as-is.
    pub fn segments(&self) -> PathSegments<'_> {
        let is_absolute = self.is_absolute();
        let is_directory = self.is_directory();

        let mut body = self.0.as_str();
        if is_absolute {
            body = body.strip_prefix('/').unwrap_or(body);
        }
        if is_directory {
            body = body.strip_suffix('/').unwrap_or(body);
        }

        let segments = if body.is_empty() {
            Vec::new()
        } else {
            body.split('/').collect()
        };

        PathSegments {
            segments,
            is_absolute,
            is_directory,
        }
    }

    /// Why this pattern is malformed, if it is.
    ///
    /// Rejects patterns with no named segment, empty segments, and `.` or
    /// `..` segments. Only consulted in strict mode.
    pub fn malformed_reason(&self) -> Option<&'static str> {
        let parts = self.segments();
        if parts.segments.is_empty() {
            return Some("no path segments");
        }
        for segment in &parts.segments {
            match *segment {
                "" => return Some("empty path segment"),
                "." | ".." => return Some("relative path segment"),
                _ => {}
            }
        }
        None
    }
}

impl fmt::Display for IncludePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IncludePattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IncludePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

/// Parse a single line, returning the include pattern it declares.
pub fn parse_line(line: &str) -> Option<IncludePattern> {
    let rest = line.trim().strip_prefix(INCLUDE_MARKER)?;
    let pattern = rest.trim();
    if pattern.is_empty() {
        tracing::debug!("skipping include directive with no path");
        return None;
    }
    Some(IncludePattern::new(pattern))
}

/// Parse include patterns from a sequence of lines, preserving order.
///
/// Duplicates are kept; deduplication happens at the rule level.
pub fn parse_lines<I, S>(lines: I) -> Vec<IncludePattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

/// Parse include patterns from file content.
pub fn parse(content: &str) -> Vec<IncludePattern> {
    parse_lines(content.lines())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
