//! Bounded directory walk collecting candidate files.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// Maximum directory depth visited below the source root.
pub const MAX_WALK_DEPTH: usize = 10;

/// Recursively list files under `root` carrying the target extension.
///
/// The walk is depth-bounded, does not follow symlinks, and treats every
/// unreadable directory or entry as non-fatal: the entry is logged and
/// skipped, and the partial listing is returned. Discovery order is the
/// walk order, which later fixes bucket order in the index.
pub fn list_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .max_depth(MAX_WALK_DEPTH)
        .follow_links(false)
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_extension(entry.path(), extension) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                warn!("skipping unreadable entry under {}: {}", root.display(), err);
            }
        }
    }

    files
}

/// Case-insensitive extension check.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a 798541.pdf"), b"x").unwrap();
        fs::create_dir_all(dir.path().join("2025/jan")).unwrap();
        fs::write(dir.path().join("2025/jan/b 769591.PDF"), b"x").unwrap();
        fs::write(dir.path().join("2025/notes.txt"), b"x").unwrap();

        let mut names: Vec<String> = list_files(dir.path(), "pdf")
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();

        assert_eq!(names, vec!["a 798541.pdf", "b 769591.PDF"]);
    }

    #[test]
    fn test_missing_root_yields_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(list_files(&gone, "pdf").is_empty());
    }
}
