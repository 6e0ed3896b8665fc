//! Core types and utilities for Codequill
//!
//! This module contains the fundamental data types and error handling
//! used throughout the system.

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{CodequillError, Result};
pub use types::{
    BundleEntry, ExcludedFile, FilterResult, NormalizedPattern, PatternSource, RawPattern,
    TrackedFile,
};
