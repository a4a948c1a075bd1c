//! Sequential-numbered copying of resolved files.

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::matcher::FoundPdf;
use crate::models::report::CopyFailure;

/// Outcome of one copy pass into a destination folder.
#[derive(Debug, Default, Clone)]
pub struct CopyReport {
    /// Destination filenames written, in sequence order.
    pub copied: Vec<String>,
    /// Per-file failures; these never consume a sequence number.
    pub failures: Vec<CopyFailure>,
}

/// Copy resolved files into `dest_dir` with sequential numbering.
///
/// Files are deduplicated by source path (one physical file matched by
/// two numbers is copied once). Numbering starts at 1 and is advanced
/// only by successful copies, so the written names form a gapless
/// sequence; a failed copy is reported and the next success reuses its
/// number. The caller is expected to have verified that `dest_dir`
/// exists.
pub fn copy_found(found: &[FoundPdf], dest_dir: &Path) -> CopyReport {
    let mut report = CopyReport::default();
    let mut seen: IndexSet<&Path> = IndexSet::new();
    let mut sequence = 1usize;

    for pdf in found {
        if !seen.insert(pdf.path.as_path()) {
            debug!("skipping duplicate source {}", pdf.path.display());
            continue;
        }

        let dest_name = format!("{}- {}", sequence, pdf.file_name);
        let dest = dest_dir.join(&dest_name);

        match copy_file(&pdf.path, &dest) {
            Ok(()) => {
                report.copied.push(dest_name);
                sequence += 1;
            }
            Err(reason) => {
                warn!("copy failed for {}: {}", pdf.file_name, reason);
                report.failures.push(CopyFailure {
                    file: pdf.file_name.clone(),
                    error: reason,
                });
            }
        }
    }

    report
}

/// Copy one file, reporting a human-readable reason on failure.
fn copy_file(source: &Path, dest: &Path) -> Result<(), String> {
    if fs::metadata(source).is_err() {
        return Err("source file not found".to_string());
    }

    let dest_dir_exists = dest
        .parent()
        .is_some_and(|dir| fs::metadata(dir).map(|m| m.is_dir()).unwrap_or(false));
    if !dest_dir_exists {
        return Err("destination folder does not exist".to_string());
    }

    fs::copy(source, dest).map(|_| ()).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn found(dir: &Path, name: &str) -> FoundPdf {
        let path = dir.join(name);
        fs::write(&path, b"x").unwrap();
        FoundPdf {
            number: String::new(),
            file_name: name.to_string(),
            path,
            size: 1,
        }
    }

    fn phantom(name: &str) -> FoundPdf {
        FoundPdf {
            number: String::new(),
            file_name: name.to_string(),
            path: PathBuf::from("/nonexistent").join(name),
            size: 0,
        }
    }

    #[test]
    fn test_sequential_numbering() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        let files = vec![found(src.path(), "a.pdf"), found(src.path(), "b.pdf")];
        let report = copy_found(&files, dest.path());

        assert_eq!(report.copied, vec!["1- a.pdf", "2- b.pdf"]);
        assert!(report.failures.is_empty());
        assert!(dest.path().join("1- a.pdf").exists());
        assert!(dest.path().join("2- b.pdf").exists());
    }

    #[test]
    fn test_failure_does_not_consume_a_number() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        let files = vec![
            found(src.path(), "a.pdf"),
            phantom("b.pdf"),
            found(src.path(), "c.pdf"),
        ];
        let report = copy_found(&files, dest.path());

        assert_eq!(report.copied, vec!["1- a.pdf", "2- c.pdf"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, "b.pdf");
        assert_eq!(report.failures[0].error, "source file not found");
    }

    #[test]
    fn test_duplicate_sources_copy_once() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        let one = found(src.path(), "a.pdf");
        let files = vec![one.clone(), one];
        let report = copy_found(&files, dest.path());

        assert_eq!(report.copied, vec!["1- a.pdf"]);
    }

    #[test]
    fn test_missing_destination_reported() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let gone = dest.path().join("not-created");

        let files = vec![found(src.path(), "a.pdf")];
        let report = copy_found(&files, &gone);

        assert!(report.copied.is_empty());
        assert_eq!(report.failures[0].error, "destination folder does not exist");
    }
}
