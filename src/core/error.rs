//! Error types for Codequill

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Codequill operations
#[derive(Error, Debug)]
pub enum CodequillError {
    /// Project-related errors
    #[error("Project directory not found: {path}")]
    ProjectDirNotFound { path: PathBuf },

    /// Version-control errors
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Failed to list tracked files: {reason}")]
    VcsExecution { reason: String },

    /// Ignore-file errors
    #[error("Failed to read ignore file {path}: {source}")]
    IgnoreFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File-related errors
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodequillError {
    /// Create a new project directory not found error
    pub fn project_dir_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ProjectDirNotFound { path: path.into() }
    }

    /// Create a new not-a-repository error
    pub fn not_a_repository(path: impl Into<PathBuf>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    /// Create a new VCS execution error
    pub fn vcs_execution(reason: impl Into<String>) -> Self {
        Self::VcsExecution {
            reason: reason.into(),
        }
    }

    /// Create a new ignore file read error
    pub fn ignore_file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IgnoreFileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new per-file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

/// Result type alias for Codequill operations
pub type Result<T> = std::result::Result<T, CodequillError>;
