//! Report structures produced by the batch coordinator.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One due date and the invoice numbers falling on it; the unit the
/// batch coordinator iterates over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueDateGroup {
    /// Due date; its year selects the source folder and the full date
    /// selects the destination folder.
    pub due_date: NaiveDate,
    /// Raw invoice numbers as they came out of the spreadsheet.
    pub numbers: Vec<String>,
}

/// A copy failure, reported but never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFailure {
    /// Original filename (or "N/A" for group-level failures).
    pub file: String,
    /// Human-readable reason.
    pub error: String,
}

/// Result of processing one due-date group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub due_date: NaiveDate,
    pub dest_dir: PathBuf,
    pub total_numbers: usize,
    pub total_found: usize,
    pub total_copied: usize,
    pub total_not_found: usize,
    pub total_ignored: usize,
    pub total_errors: usize,
    /// Destination filenames actually written, in sequence order.
    pub copied: Vec<String>,
    /// Numbers no variant resolved.
    pub not_found: Vec<String>,
    /// Numbers ignored for having too few digits.
    pub ignored: Vec<String>,
    /// Copy failures, and the group-level failure when a folder is missing.
    pub errors: Vec<CopyFailure>,
    pub elapsed_ms: u64,
}

/// Aggregate counters across all groups of a batch.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_groups: usize,
    pub total_numbers: usize,
    pub total_found: usize,
    pub total_copied: usize,
    pub total_not_found: usize,
    pub total_ignored: usize,
    pub total_errors: usize,
}

/// Full batch report: per-group details plus the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// True only when the aggregate error count is zero; not-found and
    /// ignored numbers are informational and never flip this.
    pub success: bool,
    pub groups: Vec<GroupReport>,
    pub summary: BatchSummary,
    pub elapsed_ms: u64,
}

impl BatchReport {
    /// Assemble a report from per-group results, computing the aggregate.
    pub fn from_group_reports(groups: Vec<GroupReport>, elapsed_ms: u64) -> Self {
        let mut summary = BatchSummary {
            total_groups: groups.len(),
            ..BatchSummary::default()
        };
        for group in &groups {
            summary.total_numbers += group.total_numbers;
            summary.total_found += group.total_found;
            summary.total_copied += group.total_copied;
            summary.total_not_found += group.total_not_found;
            summary.total_ignored += group.total_ignored;
            summary.total_errors += group.total_errors;
        }

        Self {
            success: summary.total_errors == 0,
            groups,
            summary,
            elapsed_ms,
        }
    }
}

/// Existence and occupancy of one destination folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderStatus {
    pub due_date: NaiveDate,
    pub path: PathBuf,
    pub exists: bool,
    pub empty: bool,
    pub file_count: usize,
}
