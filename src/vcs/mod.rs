//! Version-control integration
//!
//! The pipeline only needs one thing from the VCS: the list of files it
//! tracks under a directory. [`FileLister`] is that seam; [`GitFileLister`]
//! is the production implementation.

pub mod git;

use crate::core::error::Result;
use crate::core::types::TrackedFile;
use std::path::Path;

pub use git::GitFileLister;

/// Source of the tracked-file list
pub trait FileLister: Send + Sync {
    /// List tracked files under `dir`, relative to it and `/`-separated.
    ///
    /// Fails with [`crate::CodequillError::NotARepository`] when `dir` is not
    /// inside a repository.
    fn list_tracked(&self, dir: &Path) -> Result<Vec<TrackedFile>>;
}
