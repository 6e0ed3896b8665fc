//! Concurrent reading of included files
//!
//! Reads are independent, so they run on a rayon pool. Results come back in
//! the order of the input list no matter which read finishes first.

use crate::core::error::CodequillError;
use crate::core::types::{BundleEntry, TrackedFile};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A file that could not be read and was left out of the bundle
#[derive(Debug)]
pub struct ReadFailure {
    pub file: TrackedFile,
    pub error: CodequillError,
}

/// Outcome of the read step
#[derive(Debug, Default)]
pub struct ReadReport {
    /// Successfully read files, in input order
    pub entries: Vec<BundleEntry>,
    /// Failed files, in input order
    pub failures: Vec<ReadFailure>,
}

/// Read one tracked file as text; invalid UTF-8 is replaced, not rejected
pub fn read_entry(project_dir: &Path, file: &TrackedFile) -> Result<BundleEntry, CodequillError> {
    let path = file.resolve(project_dir);
    let bytes = fs::read(&path).map_err(|e| CodequillError::file_read(&path, e))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    Ok(BundleEntry::new(file.clone(), content))
}

/// Read every file in `files`.
///
/// `threads == 0` uses rayon's global pool. A failure never aborts the other
/// reads; it is recorded in [`ReadReport::failures`].
pub fn read_entries(project_dir: &Path, files: &[TrackedFile], threads: usize) -> ReadReport {
    let read_all = || -> Vec<Result<BundleEntry, ReadFailure>> {
        files
            .par_iter()
            .map(|file| {
                read_entry(project_dir, file).map_err(|error| ReadFailure {
                    file: file.clone(),
                    error,
                })
            })
            .collect()
    };

    let results = if threads == 0 {
        read_all()
    } else {
        match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(read_all),
            Err(e) => {
                warn!("Could not build a {}-thread read pool ({}), using the default", threads, e);
                read_all()
            },
        }
    };

    let mut report = ReadReport::default();
    for result in results {
        match result {
            Ok(entry) => report.entries.push(entry),
            Err(failure) => report.failures.push(failure),
        }
    }

    debug!(
        "Read {} files ({} failed)",
        report.entries.len(),
        report.failures.len()
    );
    report
}
