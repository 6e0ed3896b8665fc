//! Command-line interface for Codequill

use crate::config::CONFIG_ENV;
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod reporter;

/// Codequill - bundle a git project's tracked files into one text file
#[derive(Parser, Debug)]
#[command(
    name = "codequill",
    version,
    disable_version_flag = true,
    about = "Bundle the tracked files of a git project into a single text file",
    long_about = "Codequill lists the files git tracks in a project, drops the ones matched by \
                  .codequillignore or --ignore patterns, and concatenates the rest into one \
                  delimited text file."
)]
pub struct Cli {
    /// Project directory
    #[arg(default_value = ".")]
    pub project_dir: PathBuf,

    /// Output file, relative to the project directory unless absolute
    /// [default: codequill-prompt.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated patterns to ignore in addition to .codequillignore
    #[arg(short, long, default_value = "")]
    pub ignore: String,

    /// Show which files would be bundled without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// List excluded files and enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to an alternative config file
    #[arg(long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["codequill"]).unwrap();
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert_eq!(cli.output, None);
        assert_eq!(cli.ignore, "");
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "codequill",
            "my-project",
            "-o",
            "out.txt",
            "-i",
            "README.md,server/",
        ])
        .unwrap();
        assert_eq!(cli.project_dir, PathBuf::from("my-project"));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.ignore, "README.md,server/");
    }

    #[test]
    fn test_short_version_flag() {
        let err = Cli::try_parse_from(["codequill", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
