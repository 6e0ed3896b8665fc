//! Core data types for Codequill

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A project-relative, forward-slash separated path reported by the VCS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedFile(String);

impl TrackedFile {
    pub fn new(path: impl Into<String>) -> Self {
        TrackedFile(path.into())
    }

    /// The path exactly as the lister reported it
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location of this file on disk under `project_dir`
    pub fn resolve(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.0)
    }
}

impl fmt::Display for TrackedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackedFile {
    fn from(path: &str) -> Self {
        TrackedFile(path.to_string())
    }
}

impl From<String> for TrackedFile {
    fn from(path: String) -> Self {
        TrackedFile(path)
    }
}

/// Where a raw pattern came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSource {
    /// A line of `.codequillignore`
    IgnoreFile,
    /// A token of the `--ignore` list
    Cli,
}

/// An ignore-style pattern as the user wrote it, already trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPattern {
    pub text: String,
    pub source: PatternSource,
}

impl RawPattern {
    pub fn new(text: impl Into<String>, source: PatternSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RawPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A pattern rewritten into canonical glob syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPattern(String);

impl NormalizedPattern {
    pub(crate) fn new(glob: String) -> Self {
        NormalizedPattern(glob)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked file that some pattern excluded, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedFile {
    pub file: TrackedFile,
    /// The first pattern (in aggregation order) that matched
    pub pattern: NormalizedPattern,
}

/// Partition of the tracked files produced by the filter engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    /// Surviving files, in their original order
    pub included: Vec<TrackedFile>,
    pub excluded: Vec<ExcludedFile>,
}

impl FilterResult {
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    pub fn total(&self) -> usize {
        self.included.len() + self.excluded.len()
    }
}

/// One section of the final artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub file: TrackedFile,
    pub content: String,
}

impl BundleEntry {
    pub fn new(file: TrackedFile, content: impl Into<String>) -> Self {
        Self {
            file,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_file_resolves_under_project() {
        let file = TrackedFile::from("server/db.lock");
        let resolved = file.resolve(Path::new("/work/project"));
        assert_eq!(resolved, PathBuf::from("/work/project/server/db.lock"));
        assert_eq!(file.to_string(), "server/db.lock");
    }

    #[test]
    fn test_filter_result_counts() {
        let result = FilterResult {
            included: vec![TrackedFile::from("index.js")],
            excluded: vec![ExcludedFile {
                file: TrackedFile::from("temp.log"),
                pattern: NormalizedPattern::new("**/*.log".to_string()),
            }],
        };
        assert_eq!(result.excluded_count(), 1);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_tracked_file_serializes_as_plain_string() {
        let json = serde_json::to_string(&TrackedFile::from("docs/guide.md")).unwrap();
        assert_eq!(json, "\"docs/guide.md\"");
    }
}
