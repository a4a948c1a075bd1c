//! Core library for matching accounts-payable invoice records to PDF files.
//!
//! This crate provides:
//! - Invoice number normalization and lookup-variant generation
//! - Numeric token extraction from filenames (currency-aware)
//! - A cached reverse index from tokens to candidate files
//! - Matching with a strict minimum-digit gate against false positives
//! - Sequential-numbered copying into date-organized destination folders
//! - A batch coordinator aggregating per-due-date group reports

pub mod batch;
pub mod copier;
pub mod error;
pub mod index;
pub mod matcher;
pub mod models;
pub mod normalize;

pub use error::{Error, Result};
pub use models::config::MatchConfig;
pub use models::report::{
    BatchReport, BatchSummary, CopyFailure, DueDateGroup, FolderStatus, GroupReport,
};
pub use normalize::{filename_tokens, lookup_variants, normalize_number, MIN_SEARCH_DIGITS};
pub use index::{IndexCache, TokenIndex, DEFAULT_INDEX_TTL};
pub use matcher::{
    resolve, resolve_all, resolve_in_list, search_batch, FoundPdf, IgnoreReason, MatchOutcome,
    SearchResults,
};
pub use copier::{copy_found, CopyReport};
pub use batch::{validate_dest_folders, BatchRunner, MAX_GROUPS, MAX_NUMBERS_PER_GROUP};
