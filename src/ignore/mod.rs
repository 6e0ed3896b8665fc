//! File ignore system with .codequillignore support
//!
//! Patterns come from the project's `.codequillignore` and from the
//! `--ignore` list, are normalized from gitignore-style shapes into plain
//! globs, and are then matched against the VCS's tracked-file list.
//! There is no negation: a file is excluded as soon as any pattern matches.

pub mod checker;
pub mod parser;
pub mod scanner;
pub mod sources;

// Re-export commonly used items
pub use checker::{GlobCrateEngine, GlobEngine, IgnoreChecker, IgnoreResult, PathMatcher};
pub use parser::{normalize, normalize_all, PatternKind};
pub use scanner::{filter_files, FileFilter};
pub use sources::{collect_patterns, PatternSources, IGNORE_FILE_NAME};
