// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ignore file rendering.

use crate::rules::Rule;

/// Lines written above the generated rules.
pub const HEADER: &[&str] = &[
    "# Generated from include patterns",
    "# Note: More specific rules override less specific ones",
];

/// Render rules as ignore file content.
///
/// The header and a blank line come first, then one rule per line. The
/// content always ends with a newline.
pub fn render(rules: &[Rule]) -> String {
    let mut out = String::new();
    for line in HEADER {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    for rule in rules {
        out.push_str(&rule.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
