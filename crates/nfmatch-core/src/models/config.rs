//! Configuration for source and destination folder layout.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Folder layout configuration.
///
/// Source folders are organized per fiscal year under
/// `{base}/{source_subdir}/{year}`; destination folders per due date
/// under `{base}/{dest_subdir}/{year}/{MM}-{year}/{DD}-{MM}-{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Root under which both trees live.
    pub base_path: PathBuf,

    /// Source tree (incoming documents), relative to the base.
    pub source_subdir: PathBuf,

    /// Destination tree (filed documents), relative to the base.
    pub dest_subdir: PathBuf,

    /// Target document extension, compared case-insensitively.
    pub extension: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            source_subdir: PathBuf::from("incoming"),
            dest_subdir: PathBuf::from("by-due-date"),
            extension: "pdf".to_string(),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Source folder holding the documents of one fiscal year.
    pub fn source_dir(&self, year: i32) -> PathBuf {
        self.base_path
            .join(&self.source_subdir)
            .join(year.to_string())
    }

    /// Destination folder for one due date, zero-padded month and day.
    pub fn dest_dir(&self, date: NaiveDate) -> PathBuf {
        let (year, month, day) = (date.year(), date.month(), date.day());
        self.base_path
            .join(&self.dest_subdir)
            .join(year.to_string())
            .join(format!("{month:02}-{year}"))
            .join(format!("{day:02}-{month:02}-{year}"))
    }
}
