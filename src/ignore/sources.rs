//! Collection of raw patterns from `.codequillignore` and the `--ignore` list

use crate::core::error::{CodequillError, Result};
use crate::core::types::{PatternSource, RawPattern};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project-local ignore file
pub const IGNORE_FILE_NAME: &str = ".codequillignore";

/// Separator between tokens of the `--ignore` list
const CLI_SEPARATOR: char = ',';

/// Location of the ignore file for a project
pub fn ignore_file_path(project_dir: &Path) -> PathBuf {
    project_dir.join(IGNORE_FILE_NAME)
}

/// Read the ignore file of a project.
///
/// Returns `Ok(None)` when the file does not exist. Invalid UTF-8 is
/// replaced, not rejected. Any other failure is an
/// [`CodequillError::IgnoreFileRead`].
pub fn load_ignore_file(project_dir: &Path) -> Result<Option<String>> {
    let path = ignore_file_path(project_dir);
    match fs::read(&path) {
        Ok(bytes) => {
            debug!("Loaded {}", path.display());
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No {} in {}", IGNORE_FILE_NAME, project_dir.display());
            Ok(None)
        },
        Err(e) => Err(CodequillError::ignore_file_read(path, e)),
    }
}

/// Patterns from ignore-file content, one per non-blank, non-comment line
pub fn parse_ignore_content(content: &str) -> Vec<RawPattern> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| RawPattern::new(line, PatternSource::IgnoreFile))
        .collect()
}

/// Patterns from a comma-separated CLI list; empty tokens are dropped
pub fn split_cli_patterns(list: &str) -> Vec<RawPattern> {
    list.split(CLI_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| RawPattern::new(token, PatternSource::Cli))
        .collect()
}

/// Merge both sources: ignore-file lines first, then CLI tokens, each in
/// their own order.
pub fn collect_patterns(ignore_content: Option<&str>, cli_list: &str) -> Vec<RawPattern> {
    let mut patterns = ignore_content.map(parse_ignore_content).unwrap_or_default();
    patterns.extend(split_cli_patterns(cli_list));
    patterns
}

/// Raw patterns of a project together with where they came from
#[derive(Debug, Clone, Default)]
pub struct PatternSources {
    pub patterns: Vec<RawPattern>,
    pub ignore_file_found: bool,
}

impl PatternSources {
    /// Load the project's ignore file and merge it with the CLI list
    pub fn load(project_dir: &Path, cli_list: &str) -> Result<Self> {
        let content = load_ignore_file(project_dir)?;
        Ok(Self {
            patterns: collect_patterns(content.as_deref(), cli_list),
            ignore_file_found: content.is_some(),
        })
    }

    pub fn count_from(&self, source: PatternSource) -> usize {
        self.patterns.iter().filter(|p| p.source == source).count()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn texts(patterns: &[RawPattern]) -> Vec<&str> {
        patterns.iter().map(RawPattern::as_str).collect()
    }

    #[test]
    fn test_ignore_file_then_cli_order() {
        let patterns = collect_patterns(Some("# c\n\n*.log\n*.lock\n"), "README.md,server/");
        assert_eq!(texts(&patterns), vec!["*.log", "*.lock", "README.md", "server/"]);
        assert_eq!(patterns[0].source, PatternSource::IgnoreFile);
        assert_eq!(patterns[3].source, PatternSource::Cli);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let content = "  # indented comment\n\n   \n*.tmp\r\n  spaced  \n";
        let patterns = parse_ignore_content(content);
        assert_eq!(texts(&patterns), vec!["*.tmp", "spaced"]);
    }

    #[test]
    fn test_cli_empty_tokens_dropped() {
        assert!(split_cli_patterns("").is_empty());
        let patterns = split_cli_patterns(" a.txt ,, ,b/ ,");
        assert_eq!(texts(&patterns), vec!["a.txt", "b/"]);
    }

    #[test]
    fn test_absent_ignore_file_is_not_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        assert!(load_ignore_file(temp_dir.path())?.is_none());

        let sources = PatternSources::load(temp_dir.path(), "server/")?;
        assert!(!sources.ignore_file_found);
        assert_eq!(sources.count_from(PatternSource::Cli), 1);
        assert_eq!(sources.count_from(PatternSource::IgnoreFile), 0);
        Ok(())
    }

    #[test]
    fn test_present_ignore_file_is_loaded() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(ignore_file_path(temp_dir.path()), "*.log\ndocs/\n")?;

        let sources = PatternSources::load(temp_dir.path(), "")?;
        assert!(sources.ignore_file_found);
        assert_eq!(texts(&sources.patterns), vec!["*.log", "docs/"]);
        Ok(())
    }

    #[test]
    fn test_non_utf8_ignore_file_still_loads() -> Result<()> {
        let temp_dir = TempDir::new()?;
        // Latin-1 "café" in a comment
        fs::write(ignore_file_path(temp_dir.path()), b"# caf\xe9\n*.log\n")?;

        let sources = PatternSources::load(temp_dir.path(), "")?;
        assert!(sources.ignore_file_found);
        assert_eq!(texts(&sources.patterns), vec!["*.log"]);
        Ok(())
    }

    #[test]
    fn test_unreadable_ignore_file_is_fatal() -> Result<()> {
        let temp_dir = TempDir::new()?;
        // A directory in place of the file cannot be read as text.
        fs::create_dir(ignore_file_path(temp_dir.path()))?;

        let err = load_ignore_file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CodequillError::IgnoreFileRead { .. }));
        Ok(())
    }
}
