//! Run command - process a batch of due-date groups.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use nfmatch_core::{BatchReport, BatchRunner, DueDateGroup, GroupReport, IndexCache};

use super::load_config;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// JSON file with due-date groups:
    /// [{"due_date": "2025-09-15", "numbers": ["798541", ...]}, ...]
    #[arg(required = true)]
    groups: PathBuf,

    /// Write the full report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a per-group summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let data = fs::read_to_string(&args.groups)?;
    let groups: Vec<DueDateGroup> = serde_json::from_str(&data)?;

    let cache = IndexCache::new(config.extension.clone());
    let runner = BatchRunner::new(&config, &cache);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] processing {msg}")
            .unwrap(),
    );
    pb.set_message(format!("{} group(s)", groups.len()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = runner.run(&groups)?;
    pb.finish_and_clear();

    print_report(&report);

    if let Some(path) = &args.output {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            path.display()
        );
    }

    if let Some(path) = &args.summary {
        write_summary_csv(path, &report.groups)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            path.display()
        );
    }

    tracing::debug!("batch finished in {:?}", start.elapsed());

    if report.success {
        Ok(())
    } else {
        anyhow::bail!("{} copy error(s), see report", report.summary.total_errors)
    }
}

fn print_report(report: &BatchReport) {
    for group in &report.groups {
        let marker = if group.total_errors == 0 {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!(
            "{} {}: {} copied, {} not found, {} ignored, {} error(s) ({} ms)",
            marker,
            group.due_date,
            group.total_copied,
            group.total_not_found,
            group.total_ignored,
            group.total_errors,
            group.elapsed_ms
        );
        for failure in &group.errors {
            println!("    {}: {}", failure.file, failure.error);
        }
    }

    println!();
    let summary = &report.summary;
    println!(
        "{} {} group(s): {} number(s), {} found, {} copied, {} not found, {} ignored, {} error(s) in {} ms",
        if report.success {
            style("✓").green()
        } else {
            style("✗").red()
        },
        summary.total_groups,
        summary.total_numbers,
        summary.total_found,
        summary.total_copied,
        summary.total_not_found,
        summary.total_ignored,
        summary.total_errors,
        report.elapsed_ms
    );
}

fn write_summary_csv(path: &std::path::Path, groups: &[GroupReport]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "due_date",
        "dest_dir",
        "numbers",
        "found",
        "copied",
        "not_found",
        "ignored",
        "errors",
        "elapsed_ms",
    ])?;

    for group in groups {
        writer.write_record([
            group.due_date.to_string(),
            group.dest_dir.display().to_string(),
            group.total_numbers.to_string(),
            group.total_found.to_string(),
            group.total_copied.to_string(),
            group.total_not_found.to_string(),
            group.total_ignored.to_string(),
            group.total_errors.to_string(),
            group.elapsed_ms.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
