//! Data models: configuration and report structures.

pub mod config;
pub mod report;

pub use config::MatchConfig;
pub use report::{
    BatchReport, BatchSummary, CopyFailure, DueDateGroup, FolderStatus, GroupReport,
};
