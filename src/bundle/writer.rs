//! Artifact rendering and writing

use crate::core::error::{CodequillError, Result};
use crate::core::types::BundleEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Separator placed between consecutive entries
pub const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Default artifact name, relative to the project directory
pub const DEFAULT_OUTPUT: &str = "codequill-prompt.txt";

/// `<path>\n<content>`
pub fn render_entry(entry: &BundleEntry) -> String {
    format!("{}\n{}", entry.file, entry.content)
}

/// Join rendered entries with [`ENTRY_SEPARATOR`]; no trailing separator
pub fn concatenate(entries: &[BundleEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Resolve the output path against the project directory when relative
pub fn resolve_output_path(project_dir: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        project_dir.join(output)
    }
}

/// Write the artifact, replacing any existing file. Returns bytes written.
pub fn write_artifact(path: &Path, content: &str) -> Result<usize> {
    fs::write(path, content).map_err(|e| CodequillError::output_write(path, e))?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TrackedFile;
    use tempfile::TempDir;

    fn entry(path: &str, content: &str) -> BundleEntry {
        BundleEntry::new(TrackedFile::from(path), content)
    }

    #[test]
    fn test_concatenate_format() {
        let bundle = concatenate(&[entry("a.js", "let a = 1;"), entry("b/c.md", "# C\n")]);
        assert_eq!(bundle, "a.js\nlet a = 1;\n\n---\n\nb/c.md\n# C\n");
    }

    #[test]
    fn test_single_and_empty_bundles() {
        assert_eq!(concatenate(&[entry("only.txt", "x")]), "only.txt\nx");
        assert_eq!(concatenate(&[]), "");
    }

    #[test]
    fn test_split_on_separator_recovers_entries() {
        let entries = vec![
            entry("index.js", "console.log(1)"),
            entry("docs/guide.md", "Guide"),
            entry("empty.txt", ""),
        ];
        let bundle = concatenate(&entries);
        let segments: Vec<&str> = bundle.split(ENTRY_SEPARATOR).collect();
        assert_eq!(segments.len(), entries.len());
        for (segment, entry) in segments.iter().zip(&entries) {
            assert!(segment.starts_with(&format!("{}\n", entry.file)));
        }
    }

    #[test]
    fn test_resolve_output_path() {
        let project = Path::new("/work/project");
        assert_eq!(
            resolve_output_path(project, Path::new("out.txt")),
            PathBuf::from("/work/project/out.txt")
        );
        let absolute = std::env::temp_dir().join("bundle.txt");
        assert_eq!(resolve_output_path(project, &absolute), absolute);
    }

    #[test]
    fn test_write_artifact_overwrites() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        fs::write(&path, "old content that is longer")?;

        let written = write_artifact(&path, "new")?;
        assert_eq!(written, 3);
        assert_eq!(fs::read_to_string(&path)?, "new");
        Ok(())
    }

    #[test]
    fn test_write_into_missing_directory_fails() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("no/such/dir/out.txt");

        let err = write_artifact(&path, "x").unwrap_err();
        assert!(matches!(err, CodequillError::OutputWrite { .. }));
        Ok(())
    }
}
