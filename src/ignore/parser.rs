//! Normalization of ignore-style patterns into canonical glob syntax
//!
//! Authors of `.codequillignore` write patterns the way they write
//! `.gitignore` lines. The filter engine only understands plain globs, so every
//! pattern is rewritten according to its shape:
//!
//! | Shape                        | Example       | Glob           |
//! |------------------------------|---------------|----------------|
//! | ends with `/`                | `build/`      | `build/**`     |
//! | no `/` at all                | `*.log`       | `**/*.log`     |
//! | contains `/`, not at the end | `src/main.js` | `src/main.js`  |

use crate::core::types::{NormalizedPattern, RawPattern};

/// Path separator understood by ignore patterns
pub const SEPARATOR: char = '/';

/// Suffix that makes a directory pattern cover its whole subtree
const SUBTREE_SUFFIX: &str = "**";

/// Prefix that lets a bare name match at any depth
const ANY_DEPTH_PREFIX: &str = "**/";

/// How a trimmed pattern is anchored in the project tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `build/`: the directory and everything beneath it
    Directory,
    /// `*.log`, `Makefile`: the named entry anywhere in the tree
    AnyDepth,
    /// `src/main.js`, `docs/*.md`: a path relative to the project root
    Rooted,
}

impl PatternKind {
    /// Classify an already-trimmed pattern
    pub fn classify(pattern: &str) -> Self {
        if pattern.ends_with(SEPARATOR) {
            PatternKind::Directory
        } else if !pattern.contains(SEPARATOR) {
            PatternKind::AnyDepth
        } else {
            PatternKind::Rooted
        }
    }

    /// Rewrite a trimmed pattern of this kind into glob syntax
    pub fn rewrite(self, pattern: &str) -> String {
        match self {
            PatternKind::Directory => format!("{}{}", pattern, SUBTREE_SUFFIX),
            PatternKind::AnyDepth => format!("{}{}", ANY_DEPTH_PREFIX, pattern),
            PatternKind::Rooted => pattern.to_string(),
        }
    }
}

/// Normalize one raw pattern string.
///
/// Total: every input yields a pattern, degenerate ones included
/// (`""` becomes `**/`). Callers drop blank patterns before this point.
pub fn normalize(raw: &str) -> NormalizedPattern {
    let trimmed = raw.trim();
    let kind = PatternKind::classify(trimmed);
    NormalizedPattern::new(kind.rewrite(trimmed))
}

/// Normalize an ordered sequence of raw patterns, preserving order
pub fn normalize_all(patterns: &[RawPattern]) -> Vec<NormalizedPattern> {
    patterns.iter().map(|p| normalize(p.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PatternSource;

    #[test]
    fn test_directory_pattern_covers_subtree() {
        assert_eq!(normalize("docs/").as_str(), "docs/**");
        assert_eq!(normalize("node_modules/").as_str(), "node_modules/**");
        assert_eq!(normalize("src/generated/").as_str(), "src/generated/**");
    }

    #[test]
    fn test_bare_name_matches_at_any_depth() {
        assert_eq!(normalize("*.log").as_str(), "**/*.log");
        assert_eq!(normalize("README.md").as_str(), "**/README.md");
        assert_eq!(normalize(".env").as_str(), "**/.env");
    }

    #[test]
    fn test_explicit_path_is_left_alone() {
        assert_eq!(normalize("src/main.js").as_str(), "src/main.js");
        assert_eq!(normalize("docs/*.md").as_str(), "docs/*.md");
        assert_eq!(normalize("**/cache/*.bin").as_str(), "**/cache/*.bin");
    }

    #[test]
    fn test_whitespace_trimmed_before_classification() {
        assert_eq!(normalize("  *.tmp  ").as_str(), "**/*.tmp");
        assert_eq!(normalize("\tbuild/ \n").as_str(), "build/**");
    }

    #[test]
    fn test_degenerate_inputs_still_produce_patterns() {
        assert_eq!(normalize("").as_str(), "**/");
        assert_eq!(normalize("   ").as_str(), "**/");
        assert_eq!(normalize("/").as_str(), "/**");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        for raw in ["*.lock", "server/", "a/b/c", "  x  "] {
            assert_eq!(normalize(raw), normalize(raw));
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(PatternKind::classify("build/"), PatternKind::Directory);
        assert_eq!(PatternKind::classify("*.log"), PatternKind::AnyDepth);
        assert_eq!(PatternKind::classify("src/main.js"), PatternKind::Rooted);
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let raw = vec![
            RawPattern::new("*.log", PatternSource::IgnoreFile),
            RawPattern::new("server/", PatternSource::Cli),
            RawPattern::new("src/app.js", PatternSource::Cli),
        ];
        let normalized: Vec<String> = normalize_all(&raw)
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect();
        assert_eq!(normalized, vec!["**/*.log", "server/**", "src/app.js"]);
    }
}
