//! Bundle command implementation

use crate::bundle::{BundleOptions, BundleOutcome, BundleSummary, Bundler};
use crate::cli::reporter::TerminalReporter;
use crate::cli::Cli;
use crate::config::UserConfig;
use crate::vcs::GitFileLister;
use anyhow::{Context, Result};
use colored::Colorize;

/// Execute a bundling run described by the parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => UserConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => UserConfig::load()?,
    };

    let options = BundleOptions::new(&cli.project_dir)
        .output(config.output_file(cli.output.clone()))
        .ignore(cli.ignore.clone())
        .dry_run(cli.dry_run)
        .read_threads(config.read_threads());

    let quiet = cli.quiet || cli.json;
    let reporter = TerminalReporter::new(
        config.show_progress() && !cli.no_progress,
        cli.verbose,
        quiet,
    );
    let event_reporter = reporter.clone();
    let bundler =
        Bundler::new(GitFileLister::new()).with_reporter(move |event| event_reporter.report(event));

    let outcome = match bundler.run(&options) {
        Ok(outcome) => outcome,
        Err(e) => {
            reporter.finish();
            return Err(e.into());
        },
    };
    reporter.finish();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }

    match &outcome {
        // Already announced by the reporter
        BundleOutcome::NoFiles => {},
        BundleOutcome::DryRun(summary) => print_dry_run(summary),
        BundleOutcome::Written(summary) => print_written(summary),
    }

    Ok(())
}

fn print_dry_run(summary: &BundleSummary) {
    println!("{}", "Files that would be bundled:".bright_blue());
    for file in &summary.included_files {
        println!("    {} {}", "•".green(), file);
    }
    println!();
    println!(
        "{} {} of {} tracked files would be written to {}",
        "Would bundle:".bright_green().bold(),
        summary.included_files.len(),
        summary.tracked,
        summary.output_path.display()
    );
}

fn print_written(summary: &BundleSummary) {
    println!(
        "{} Bundled {} files into {} ({} bytes)",
        "✓".green().bold(),
        summary.entries_written,
        summary.output_path.display().to_string().cyan(),
        summary.bytes_written
    );
    if !summary.skipped.is_empty() {
        println!(
            "  {} {} files could not be read and were skipped",
            "!".yellow(),
            summary.skipped.len()
        );
    }
}
