//! Batch coordination across due-date groups.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use indexmap::IndexSet;
use tracing::info;

use crate::copier::copy_found;
use crate::error::{Error, Result};
use crate::index::IndexCache;
use crate::matcher::search_batch;
use crate::models::config::MatchConfig;
use crate::models::report::{
    BatchReport, CopyFailure, DueDateGroup, FolderStatus, GroupReport,
};

/// Bounds on a batch, mirroring what callers are allowed to submit.
pub const MAX_GROUPS: usize = 31;
pub const MAX_NUMBERS_PER_GROUP: usize = 500;

/// Drives the matcher and copier over one or many due-date groups.
///
/// Groups are processed sequentially and independently: a group whose
/// source or destination folder is missing is reported as a whole-group
/// failure and the batch moves on.
pub struct BatchRunner<'a> {
    config: &'a MatchConfig,
    cache: &'a IndexCache,
}

impl<'a> BatchRunner<'a> {
    pub fn new(config: &'a MatchConfig, cache: &'a IndexCache) -> Self {
        Self { config, cache }
    }

    /// Process every group and assemble the aggregate report.
    ///
    /// Returns an error only for caller contract violations (batch
    /// bounds); everything that happens during matching and copying
    /// degrades to report entries.
    pub fn run(&self, groups: &[DueDateGroup]) -> Result<BatchReport> {
        validate_bounds(groups)?;

        let start = Instant::now();
        info!("processing batch of {} group(s)", groups.len());

        let reports: Vec<GroupReport> = groups
            .iter()
            .map(|group| self.process_group(group))
            .collect();

        Ok(BatchReport::from_group_reports(
            reports,
            start.elapsed().as_millis() as u64,
        ))
    }

    /// Process one group: verify folders, search, copy, count.
    pub fn process_group(&self, group: &DueDateGroup) -> GroupReport {
        let start = Instant::now();

        // Exact-string dedup; differently-spelled numbers resolving to
        // the same file are deduplicated later by the copier.
        let numbers: Vec<String> = group
            .numbers
            .iter()
            .cloned()
            .collect::<IndexSet<String>>()
            .into_iter()
            .collect();

        let source_dir = self.config.source_dir(group.due_date.year());
        let dest_dir = self.config.dest_dir(group.due_date);

        info!(
            "group {}: {} number(s), source {}, dest {}",
            group.due_date,
            numbers.len(),
            source_dir.display(),
            dest_dir.display()
        );

        if !folder_exists(&source_dir) {
            return failed_group(group, dest_dir, numbers, "source folder not found", start);
        }
        if !folder_exists(&dest_dir) {
            return failed_group(group, dest_dir, numbers, "destination folder not found", start);
        }

        let index = self.cache.get(&source_dir);
        let results = search_batch(&numbers, &index);
        let copy = copy_found(&results.found, &dest_dir);

        GroupReport {
            due_date: group.due_date,
            dest_dir,
            total_numbers: numbers.len(),
            total_found: results.found.len(),
            total_copied: copy.copied.len(),
            total_not_found: results.not_found.len(),
            total_ignored: results.ignored.len(),
            total_errors: copy.failures.len(),
            copied: copy.copied,
            not_found: results.not_found,
            ignored: results.ignored,
            errors: copy.failures,
            elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Report the destination folders for a list of due dates.
pub fn validate_dest_folders(config: &MatchConfig, dates: &[NaiveDate]) -> Vec<FolderStatus> {
    dates
        .iter()
        .map(|&date| {
            let path = config.dest_dir(date);
            let exists = folder_exists(&path);
            let file_count = if exists { count_entries(&path) } else { 0 };
            FolderStatus {
                due_date: date,
                path,
                exists,
                empty: file_count == 0,
                file_count,
            }
        })
        .collect()
}

fn validate_bounds(groups: &[DueDateGroup]) -> Result<()> {
    if groups.is_empty() || groups.len() > MAX_GROUPS {
        return Err(Error::InvalidBatch(format!(
            "expected 1-{} group(s), got {}",
            MAX_GROUPS,
            groups.len()
        )));
    }
    for group in groups {
        if group.numbers.is_empty() || group.numbers.len() > MAX_NUMBERS_PER_GROUP {
            return Err(Error::InvalidBatch(format!(
                "group {}: expected 1-{} number(s), got {}",
                group.due_date,
                MAX_NUMBERS_PER_GROUP,
                group.numbers.len()
            )));
        }
    }
    Ok(())
}

/// Whole-group failure: one group error, every number reported unmatched,
/// nothing processed.
fn failed_group(
    group: &DueDateGroup,
    dest_dir: std::path::PathBuf,
    numbers: Vec<String>,
    reason: &str,
    start: Instant,
) -> GroupReport {
    GroupReport {
        due_date: group.due_date,
        dest_dir,
        total_numbers: numbers.len(),
        total_found: 0,
        total_copied: 0,
        total_not_found: numbers.len(),
        total_ignored: 0,
        total_errors: 1,
        copied: Vec::new(),
        not_found: numbers,
        ignored: Vec::new(),
        errors: vec![CopyFailure {
            file: "N/A".to_string(),
            error: reason.to_string(),
        }],
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}

fn folder_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

fn count_entries(path: &Path) -> usize {
    fs::read_dir(path).map(|entries| entries.count()).unwrap_or(0)
}
