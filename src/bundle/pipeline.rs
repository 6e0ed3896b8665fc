//! The bundling pipeline
//!
//! `ListTracked → LoadPatterns → Normalize → Filter → ReadFiles → Concatenate → Write → Done`
//!
//! Every step runs once, in order. Fatal errors stop the run before any later
//! step; per-file read failures are reported and skipped. The pipeline never
//! prints: progress leaves through the event callback installed with
//! [`Bundler::with_reporter`].

use crate::bundle::reader::read_entries;
use crate::bundle::writer::{concatenate, resolve_output_path, write_artifact, DEFAULT_OUTPUT};
use crate::core::error::{CodequillError, Result};
use crate::core::types::{NormalizedPattern, PatternSource, TrackedFile};
use crate::ignore::checker::{GlobCrateEngine, GlobEngine};
use crate::ignore::parser::normalize_all;
use crate::ignore::scanner::FileFilter;
use crate::ignore::sources::PatternSources;
use crate::vcs::FileLister;
use serde::Serialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Step of a bundling run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BundlePhase {
    ListTracked,
    LoadPatterns,
    Normalize,
    Filter,
    ReadFiles,
    Concatenate,
    Write,
    Done,
}

impl fmt::Display for BundlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BundlePhase::ListTracked => "Listing tracked files",
            BundlePhase::LoadPatterns => "Loading ignore patterns",
            BundlePhase::Normalize => "Normalizing patterns",
            BundlePhase::Filter => "Filtering files",
            BundlePhase::ReadFiles => "Reading files",
            BundlePhase::Concatenate => "Concatenating",
            BundlePhase::Write => "Writing output",
            BundlePhase::Done => "Done",
        };
        f.write_str(label)
    }
}

/// Notification emitted while a run progresses
#[derive(Debug, Clone, PartialEq)]
pub enum BundleEvent {
    Phase(BundlePhase),
    Tracked {
        count: usize,
    },
    /// The VCS reported nothing; the run ends without output
    NoFiles,
    PatternsLoaded {
        from_ignore_file: usize,
        from_cli: usize,
        ignore_file_found: bool,
    },
    /// No patterns from any source; filtering keeps everything
    NoPatterns,
    Excluded {
        file: TrackedFile,
        pattern: NormalizedPattern,
    },
    Filtered {
        included: usize,
        excluded: usize,
    },
    ReadWarning {
        file: TrackedFile,
        reason: String,
    },
    Written {
        path: PathBuf,
        entries: usize,
        bytes: usize,
    },
}

/// Inputs of one run
#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub project_dir: PathBuf,
    /// Artifact path; relative paths resolve against the project directory
    pub output: PathBuf,
    /// Comma-separated extra ignore patterns
    pub ignore: String,
    /// Stop after filtering and report what would be bundled
    pub dry_run: bool,
    /// Worker threads for reading, 0 for rayon's default
    pub read_threads: usize,
}

impl BundleOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ignore: String::new(),
            dry_run: false,
            read_threads: 0,
        }
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn ignore(mut self, ignore: impl Into<String>) -> Self {
        self.ignore = ignore.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn read_threads(mut self, threads: usize) -> Self {
        self.read_threads = threads;
        self
    }
}

/// Statistics of a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleSummary {
    pub project_dir: PathBuf,
    pub output_path: PathBuf,
    pub tracked: usize,
    pub excluded: usize,
    /// Files that passed the filter, in tracked order
    pub included_files: Vec<TrackedFile>,
    /// Included files that could not be read
    pub skipped: Vec<TrackedFile>,
    pub entries_written: usize,
    pub bytes_written: usize,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "summary", rename_all = "snake_case")]
pub enum BundleOutcome {
    /// Nothing tracked; no output was written
    NoFiles,
    /// Dry run; no files were read and nothing was written
    DryRun(BundleSummary),
    Written(BundleSummary),
}

/// Runs the pipeline with a given file lister and glob engine
pub struct Bundler {
    lister: Box<dyn FileLister>,
    engine: Box<dyn GlobEngine>,
    reporter: Option<Box<dyn Fn(&BundleEvent) + Send + Sync>>,
}

impl Bundler {
    pub fn new(lister: impl FileLister + 'static) -> Self {
        Self {
            lister: Box::new(lister),
            engine: Box::new(GlobCrateEngine),
            reporter: None,
        }
    }

    /// Replace the glob engine used for matching
    pub fn with_engine(mut self, engine: impl GlobEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Set the callback receiving [`BundleEvent`]s
    pub fn with_reporter<F>(mut self, callback: F) -> Self
    where
        F: Fn(&BundleEvent) + Send + Sync + 'static,
    {
        self.reporter = Some(Box::new(callback));
        self
    }

    /// Execute one run
    pub fn run(&self, options: &BundleOptions) -> Result<BundleOutcome> {
        let project_dir = resolve_project_dir(&options.project_dir)?;
        let output_path = resolve_output_path(&project_dir, &options.output);
        info!("Bundling {}", project_dir.display());

        self.phase(BundlePhase::ListTracked);
        let tracked = self.lister.list_tracked(&project_dir)?;
        self.emit(BundleEvent::Tracked {
            count: tracked.len(),
        });
        if tracked.is_empty() {
            info!("No tracked files in {}", project_dir.display());
            self.emit(BundleEvent::NoFiles);
            return Ok(BundleOutcome::NoFiles);
        }

        self.phase(BundlePhase::LoadPatterns);
        let sources = PatternSources::load(&project_dir, &options.ignore)?;
        self.emit(BundleEvent::PatternsLoaded {
            from_ignore_file: sources.count_from(PatternSource::IgnoreFile),
            from_cli: sources.count_from(PatternSource::Cli),
            ignore_file_found: sources.ignore_file_found,
        });

        self.phase(BundlePhase::Normalize);
        let patterns = normalize_all(&sources.patterns);
        debug!("Normalized patterns: {:?}", patterns);

        self.phase(BundlePhase::Filter);
        let filter = FileFilter::with_engine(&patterns, self.engine.as_ref());
        if filter.is_identity() {
            self.emit(BundleEvent::NoPatterns);
        }
        let filtered = filter.filter(&tracked);
        debug_assert_eq!(filtered.total(), tracked.len());
        for excluded in &filtered.excluded {
            self.emit(BundleEvent::Excluded {
                file: excluded.file.clone(),
                pattern: excluded.pattern.clone(),
            });
        }
        self.emit(BundleEvent::Filtered {
            included: filtered.included.len(),
            excluded: filtered.excluded_count(),
        });

        let mut summary = BundleSummary {
            project_dir: project_dir.clone(),
            output_path: output_path.clone(),
            tracked: tracked.len(),
            excluded: filtered.excluded_count(),
            included_files: filtered.included,
            skipped: Vec::new(),
            entries_written: 0,
            bytes_written: 0,
        };

        if options.dry_run {
            self.phase(BundlePhase::Done);
            return Ok(BundleOutcome::DryRun(summary));
        }

        self.phase(BundlePhase::ReadFiles);
        let report = read_entries(&project_dir, &summary.included_files, options.read_threads);
        for failure in report.failures {
            debug!("Skipping {}: {}", failure.file, failure.error);
            self.emit(BundleEvent::ReadWarning {
                file: failure.file.clone(),
                reason: failure.error.to_string(),
            });
            summary.skipped.push(failure.file);
        }

        self.phase(BundlePhase::Concatenate);
        let bundle = concatenate(&report.entries);

        self.phase(BundlePhase::Write);
        let bytes = write_artifact(&output_path, &bundle)?;
        summary.entries_written = report.entries.len();
        summary.bytes_written = bytes;
        self.emit(BundleEvent::Written {
            path: output_path,
            entries: summary.entries_written,
            bytes,
        });

        self.phase(BundlePhase::Done);
        Ok(BundleOutcome::Written(summary))
    }

    fn phase(&self, phase: BundlePhase) {
        debug!("Phase: {}", phase);
        self.emit(BundleEvent::Phase(phase));
    }

    fn emit(&self, event: BundleEvent) {
        if let Some(callback) = &self.reporter {
            callback(&event);
        }
    }
}

/// Canonicalize the project directory, rejecting missing paths and files
pub fn resolve_project_dir(dir: &Path) -> Result<PathBuf> {
    let resolved = dunce::canonicalize(dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CodequillError::project_dir_not_found(dir),
        _ => CodequillError::Io(e),
    })?;
    if !resolved.is_dir() {
        return Err(CodequillError::project_dir_not_found(dir));
    }
    Ok(resolved)
}
