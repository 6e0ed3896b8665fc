//! Bundling of tracked files into a single text artifact

pub mod pipeline;
pub mod reader;
pub mod writer;

// Re-export commonly used items
pub use pipeline::{
    resolve_project_dir, BundleEvent, BundleOptions, BundleOutcome, BundlePhase, BundleSummary,
    Bundler,
};
pub use writer::{concatenate, DEFAULT_OUTPUT, ENTRY_SEPARATOR};
