//! Tracked-file filtering against normalized ignore patterns

use crate::core::types::{ExcludedFile, FilterResult, NormalizedPattern, TrackedFile};
use crate::ignore::checker::{GlobEngine, IgnoreChecker, IgnoreResult};
use tracing::{debug, trace};

/// Partitions tracked files into included and excluded sets
#[derive(Debug)]
pub struct FileFilter {
    checker: IgnoreChecker,
}

impl FileFilter {
    /// Create a filter using the default glob engine
    pub fn new(patterns: &[NormalizedPattern]) -> Self {
        Self {
            checker: IgnoreChecker::new(patterns),
        }
    }

    /// Create a filter using a custom glob engine
    pub fn with_engine(patterns: &[NormalizedPattern], engine: &dyn GlobEngine) -> Self {
        Self {
            checker: IgnoreChecker::with_engine(patterns, engine),
        }
    }

    /// Whether this filter would keep every file
    pub fn is_identity(&self) -> bool {
        self.checker.is_empty()
    }

    /// Filter `tracked`, keeping the original order of surviving files.
    ///
    /// Paths are matched exactly as reported; nothing is canonicalized.
    pub fn filter(&self, tracked: &[TrackedFile]) -> FilterResult {
        if self.is_identity() {
            return FilterResult {
                included: tracked.to_vec(),
                excluded: Vec::new(),
            };
        }

        let mut result = FilterResult::default();
        for file in tracked {
            match self.checker.check(file.as_str()) {
                IgnoreResult::Included => result.included.push(file.clone()),
                IgnoreResult::Ignored(pattern) => {
                    trace!("Excluding {} (matched {})", file, pattern);
                    result.excluded.push(ExcludedFile {
                        file: file.clone(),
                        pattern,
                    });
                },
            }
        }

        debug!(
            "Filtered {} tracked files against {} patterns: {} included, {} excluded",
            tracked.len(),
            self.checker.len(),
            result.included.len(),
            result.excluded_count()
        );
        result
    }
}

/// Filter `tracked` against `patterns` with the default glob engine
pub fn filter_files(tracked: &[TrackedFile], patterns: &[NormalizedPattern]) -> FilterResult {
    FileFilter::new(patterns).filter(tracked)
}
