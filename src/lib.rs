//! Codequill - bundle a project's tracked files into one text artifact
//!
//! Codequill asks git for the files it tracks, removes the ones matched by
//! the project's `.codequillignore` and by ad-hoc `--ignore` patterns, and
//! concatenates the rest into a single delimited file.
//!
//! # Core Features
//!
//! - **Pattern normalization**: gitignore-style patterns (`build/`, `*.log`,
//!   `src/main.js`) are rewritten into plain globs
//! - **Filtering**: a tracked file is excluded as soon as any pattern matches it
//! - **Bundling**: surviving files are read concurrently and joined in
//!   tracked order with a `---` delimiter
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use codequill::{BundleOptions, BundleOutcome, Bundler, GitFileLister};
//!
//! let options = BundleOptions::new("./my-project").ignore("*.lock,docs/");
//! let outcome = Bundler::new(GitFileLister::new()).run(&options)?;
//!
//! if let BundleOutcome::Written(summary) = outcome {
//!     println!("wrote {} files", summary.entries_written);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bundle;
pub mod cli;
pub mod config;
pub mod core;
pub mod ignore;
pub mod vcs;

// Re-export commonly used types
pub use crate::core::{
    error::{CodequillError, Result},
    types::{BundleEntry, FilterResult, NormalizedPattern, RawPattern, TrackedFile},
};

pub use bundle::{BundleEvent, BundleOptions, BundleOutcome, BundlePhase, BundleSummary, Bundler};

pub use ignore::{collect_patterns, filter_files, normalize};

pub use vcs::{FileLister, GitFileLister};

/// Current version of Codequill
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
