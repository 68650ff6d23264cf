// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ignore rule generation.
//!
//! Every include pattern is walked segment by segment. Each segment is
//! re-included, and each intermediate directory gets a `<dir>/*` rule that
//! hides its other children, so only the walked path stays visible:
//!
//! ```text
//! src/lib/core.ts  ->  !**/src
//!                      src/*
//!                      !src/lib
//!                      src/lib/*
//!                      !src/lib/core.ts
//! ```
//!
//! Later rules override earlier ones in gitignore semantics, so the rule
//! list is order preserving. The universal `*` always comes first.

use std::collections::HashSet;
use std::fmt;

use crate::error::{self, Error};
use crate::parser::IncludePattern;

/// One line of a gitignore-style rule file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `*`
    ExcludeAll,
    /// `!<path>`
    Include(String),
    /// `<path>/*`
    ExcludeChildren(String),
    /// `!<path>/**`
    IncludeTree(String),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ExcludeAll => f.write_str("*"),
            Rule::Include(path) => write!(f, "!{}", path),
            Rule::ExcludeChildren(path) => write!(f, "{}/*", path),
            Rule::IncludeTree(path) => write!(f, "!{}/**", path),
        }
    }
}

/// Ordered rules, each distinct rule text kept once at its first position.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    seen: HashSet<String>,
}

impl RuleSet {
    /// A rule set seeded with [`Rule::ExcludeAll`].
    pub fn new() -> Self {
        let mut set = Self {
            rules: Vec::new(),
            seen: HashSet::new(),
        };
        set.push(Rule::ExcludeAll);
        set
    }

    /// Append a rule unless an identical rule text is already present.
    ///
    /// Returns whether the rule was added.
    pub fn push(&mut self, rule: Rule) -> bool {
        if !self.seen.insert(rule.to_string()) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    /// Append the rules for one include pattern.
    pub fn add_pattern(&mut self, pattern: &IncludePattern) {
        let parts = pattern.segments();
        let last = parts.segments.len().saturating_sub(1);
        let mut walked: Vec<&str> = Vec::with_capacity(parts.segments.len());
        let before = self.rules.len();

        for (i, segment) in parts.segments.iter().enumerate() {
            let rule = if i == 0 && !parts.is_absolute {
                Rule::Include(format!("**/{}", segment))
            } else if walked.is_empty() {
                Rule::Include((*segment).to_string())
            } else {
                Rule::Include(format!("{}/{}", walked.join("/"), segment))
            };
            self.push(rule);
            walked.push(*segment);

            if i < last {
                self.push(Rule::ExcludeChildren(walked.join("/")));
            }
        }

        if parts.is_directory {
            self.push(Rule::IncludeTree(walked.join("/")));
        }

        tracing::trace!(
            "{}: {} new rule(s)",
            pattern,
            self.rules.len() - before
        );
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: the set starts with `*`.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Generate the rules for a list of include patterns.
///
/// Malformed patterns are not rejected; they produce whatever rules their
/// segments spell out.
pub fn generate(patterns: &[IncludePattern]) -> Vec<Rule> {
    let mut set = RuleSet::new();
    for pattern in patterns {
        set.add_pattern(pattern);
    }
    tracing::debug!(
        "generated {} rules from {} patterns",
        set.len(),
        patterns.len()
    );
    set.into_rules()
}

/// Like [`generate`], but fails on the first malformed pattern.
pub fn generate_strict(patterns: &[IncludePattern]) -> error::Result<Vec<Rule>> {
    if let Some((pattern, reason)) = patterns
        .iter()
        .find_map(|p| p.malformed_reason().map(|reason| (p, reason)))
    {
        return Err(Error::MalformedPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        });
    }
    Ok(generate(patterns))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
