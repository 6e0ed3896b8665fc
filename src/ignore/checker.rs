//! Path matching against a set of normalized patterns
//!
//! The glob engine is a capability: anything that can compile a glob into a
//! matcher with `**` crossing separators and `*` staying inside one segment
//! works. [`GlobCrateEngine`] is the default, built on the `glob` crate.

use crate::core::types::NormalizedPattern;
use glob::{MatchOptions, Pattern};
use std::fmt;
use tracing::{debug, warn};

/// A compiled pattern that can test project-relative paths
pub trait PathMatcher: Send + Sync + fmt::Debug {
    fn is_match(&self, path: &str) -> bool;
}

/// Compiles normalized patterns into matchers
pub trait GlobEngine: Send + Sync {
    fn compile(&self, pattern: &NormalizedPattern) -> Box<dyn PathMatcher>;
}

/// Options every engine must honor: case-sensitive, `*` stops at `/`,
/// dotfiles are ordinary names.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// [`GlobEngine`] backed by `glob::Pattern`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobCrateEngine;

#[derive(Debug)]
struct GlobMatcher {
    pattern: Pattern,
}

impl PathMatcher for GlobMatcher {
    fn is_match(&self, path: &str) -> bool {
        self.pattern.matches_with(path, MATCH_OPTIONS)
    }
}

impl GlobEngine for GlobCrateEngine {
    fn compile(&self, pattern: &NormalizedPattern) -> Box<dyn PathMatcher> {
        let compiled = match Pattern::new(pattern.as_str()) {
            Ok(compiled) => compiled,
            Err(e) => repair(pattern.as_str(), e.msg),
        };
        Box::new(GlobMatcher { pattern: compiled })
    }
}

/// Recover from a glob the `glob` crate rejects.
///
/// A `**` inside a component (`foo**`, `a**b`) means the same as `*`. Anything
/// still unparsable after that degrades to an exact path comparison.
fn repair(glob: &str, reason: &str) -> Pattern {
    let collapsed = collapse_inline_recursive(glob);
    if collapsed != glob {
        if let Ok(compiled) = Pattern::new(&collapsed) {
            debug!("Pattern '{}' rewritten to '{}'", glob, collapsed);
            return compiled;
        }
    }

    warn!("Invalid pattern '{}' ({}), matching it literally", glob, reason);
    Pattern::new(&Pattern::escape(glob)).unwrap_or_default()
}

/// Replace runs of `*` with a single `*` in every component that is not
/// exactly `**`
fn collapse_inline_recursive(glob: &str) -> String {
    glob.split('/')
        .map(|component| {
            if component == "**" || !component.contains("**") {
                return component.to_string();
            }
            let mut collapsed = String::with_capacity(component.len());
            for c in component.chars() {
                if c == '*' && collapsed.ends_with('*') {
                    continue;
                }
                collapsed.push(c);
            }
            collapsed
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Result of ignore checking
#[derive(Debug, Clone, PartialEq)]
pub enum IgnoreResult {
    /// Path matched the contained pattern
    Ignored(NormalizedPattern),
    /// No pattern matched
    Included,
}

impl IgnoreResult {
    pub fn is_ignored(&self) -> bool {
        matches!(self, IgnoreResult::Ignored(_))
    }
}

/// Compiled pattern set; a path is ignored iff any pattern matches it
#[derive(Debug)]
pub struct IgnoreChecker {
    rules: Vec<(NormalizedPattern, Box<dyn PathMatcher>)>,
}

impl IgnoreChecker {
    /// Compile `patterns` with the default glob engine
    pub fn new(patterns: &[NormalizedPattern]) -> Self {
        Self::with_engine(patterns, &GlobCrateEngine)
    }

    pub fn with_engine(patterns: &[NormalizedPattern], engine: &dyn GlobEngine) -> Self {
        let rules = patterns
            .iter()
            .map(|p| (p.clone(), engine.compile(p)))
            .collect();
        Self { rules }
    }

    /// Check one project-relative path.
    ///
    /// No negation exists, so the first matching pattern decides; order only
    /// changes which pattern is reported.
    pub fn check(&self, path: &str) -> IgnoreResult {
        self.rules
            .iter()
            .find(|(_, matcher)| matcher.is_match(path))
            .map(|(pattern, _)| IgnoreResult::Ignored(pattern.clone()))
            .unwrap_or(IgnoreResult::Included)
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.check(path).is_ignored()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
