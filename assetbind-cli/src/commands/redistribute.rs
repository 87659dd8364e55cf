//! Sprite archive redistribution command.

use std::path::PathBuf;

use assetbind::config::ConfigFile;
use assetbind::redistribute::{RedistributeReport, Redistributor};
use console::style;

use crate::error::CliError;

/// Arguments for `assetbind redistribute`.
#[derive(Debug, Default)]
pub struct RedistributeArgs {
    pub archive_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Redistribute archives, printing a report.
///
/// Fails when any archive was rejected, after all archives were attempted.
pub fn run(config: &ConfigFile, args: RedistributeArgs) -> Result<(), CliError> {
    let settings = &config.redistribute;
    let archive_dir = args
        .archive_dir
        .unwrap_or_else(|| settings.archive_dir.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| settings.output_dir.clone());

    println!(
        "Redistributing {} -> {}",
        archive_dir.display(),
        output_dir.display()
    );

    let report = Redistributor::new(archive_dir, output_dir)
        .with_scratch_name(settings.scratch_dir.as_str())
        .run()?;

    print_report(&report);

    if report.has_failures() {
        return Err(CliError::ArchivesFailed(report.failures.len()));
    }
    Ok(())
}

fn print_report(report: &RedistributeReport) {
    for outcome in &report.processed {
        println!(
            "  {} {}-{}: {} frames",
            style("ok").green(),
            outcome.name.class,
            outcome.name.stage,
            outcome.frames_moved
        );
    }
    for archive in &report.skipped {
        println!("  {} {}", style("skipped").yellow(), archive.display());
    }
    for failure in &report.failures {
        println!(
            "  {} {}: {}",
            style("failed").red().bold(),
            failure.archive.display(),
            failure.error
        );
    }

    println!();
    println!(
        "{} archives processed, {} skipped, {} failed, {} frames moved",
        report.processed.len(),
        report.skipped.len(),
        report.failures.len(),
        report.frames_moved()
    );
}
