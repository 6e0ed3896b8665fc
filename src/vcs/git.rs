//! `git ls-files` backed file lister

use crate::core::error::{CodequillError, Result};
use crate::core::types::TrackedFile;
use crate::vcs::FileLister;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Marker git prints on stderr outside of a work tree
const NOT_A_REPOSITORY: &str = "not a git repository";

/// Lists files through the `git` binary
#[derive(Debug, Clone)]
pub struct GitFileLister {
    program: PathBuf,
}

impl Default for GitFileLister {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }
}

impl GitFileLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FileLister for GitFileLister {
    fn list_tracked(&self, dir: &Path) -> Result<Vec<TrackedFile>> {
        debug!("Running git ls-files in {}", dir.display());
        let output = Command::new(&self.program)
            .args(["ls-files", "-z", "--cached"])
            .current_dir(dir)
            .output()
            .map_err(|e| {
                CodequillError::vcs_execution(format!(
                    "failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.to_lowercase().contains(NOT_A_REPOSITORY) {
                return Err(CodequillError::not_a_repository(dir));
            }
            return Err(CodequillError::vcs_execution(format!(
                "git ls-files exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(parse_ls_files(&output.stdout))
    }
}

/// Split NUL-terminated `ls-files -z` output into tracked files
pub(crate) fn parse_ls_files(stdout: &[u8]) -> Vec<TrackedFile> {
    stdout
        .split(|&b| b == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| TrackedFile::new(String::from_utf8_lossy(chunk).into_owned()))
        .collect()
}
