//! Terminal presentation of pipeline events

use crate::bundle::{BundleEvent, BundlePhase};
use crate::ignore::IGNORE_FILE_NAME;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Renders [`BundleEvent`]s as a spinner plus status lines on stderr
#[derive(Clone)]
pub struct TerminalReporter {
    spinner: ProgressBar,
    verbose: bool,
    quiet: bool,
}

impl TerminalReporter {
    pub fn new(show_progress: bool, verbose: bool, quiet: bool) -> Self {
        let spinner = if show_progress && !quiet && std::io::stderr().is_terminal() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        } else {
            ProgressBar::hidden()
        };

        Self {
            spinner,
            verbose,
            quiet,
        }
    }

    /// Handle one pipeline event
    pub fn report(&self, event: &BundleEvent) {
        match event {
            BundleEvent::Phase(BundlePhase::Done) => self.spinner.finish_and_clear(),
            BundleEvent::Phase(phase) => self.spinner.set_message(format!("{}...", phase)),
            BundleEvent::Tracked { count } => {
                if self.verbose {
                    self.line(format!("  {} Found {} tracked files", "•".cyan(), count));
                }
            },
            BundleEvent::NoFiles => {
                self.spinner.finish_and_clear();
                self.line(format!(
                    "{} No tracked files found. Nothing to bundle.",
                    "!".yellow()
                ));
            },
            BundleEvent::PatternsLoaded {
                from_ignore_file,
                from_cli,
                ignore_file_found,
            } => {
                if !ignore_file_found {
                    self.line(format!(
                        "  {} No {} found, no custom ignore rules applied",
                        "•".cyan(),
                        IGNORE_FILE_NAME
                    ));
                } else {
                    self.line(format!(
                        "  {} Loaded {} patterns from {}",
                        "•".cyan(),
                        from_ignore_file,
                        IGNORE_FILE_NAME
                    ));
                }
                if *from_cli > 0 {
                    self.line(format!(
                        "  {} Added {} patterns from --ignore",
                        "•".cyan(),
                        from_cli
                    ));
                }
            },
            BundleEvent::NoPatterns => {
                if self.verbose {
                    self.line(format!(
                        "  {} No ignore patterns, keeping every tracked file",
                        "•".cyan()
                    ));
                }
            },
            BundleEvent::Excluded { file, pattern } => {
                if self.verbose {
                    self.line(format!(
                        "    {} {} {}",
                        "-".red(),
                        file,
                        format!("({})", pattern).dimmed()
                    ));
                }
            },
            BundleEvent::Filtered { included, excluded } => {
                self.line(format!(
                    "  {} {} files included, {} excluded",
                    "•".cyan(),
                    included,
                    excluded
                ));
            },
            BundleEvent::ReadWarning { file, reason } => {
                // Warnings survive --quiet
                self.spinner.suspend(|| {
                    eprintln!("  {} Skipping {}: {}", "⚠".yellow(), file, reason);
                });
            },
            BundleEvent::Written { .. } => {},
        }
    }

    /// Stop the spinner, e.g. before a fatal error is printed
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn line(&self, message: String) {
        if self.quiet {
            return;
        }
        self.spinner.suspend(|| eprintln!("{}", message));
    }
}
