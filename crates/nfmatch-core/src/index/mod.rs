//! Reverse index from filename tokens to candidate files, plus its
//! time-boxed cache.

pub mod cache;
pub mod walker;

pub use cache::{IndexCache, DEFAULT_INDEX_TTL};
pub use walker::MAX_WALK_DEPTH;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::normalize::filename_tokens;

/// Immutable mapping from numeric token to the files whose names carry
/// that token, scoped to one source folder.
///
/// Bucket order is discovery order during the walk; the matcher relies
/// on it to make "first file in the bucket" deterministic.
#[derive(Debug)]
pub struct TokenIndex {
    root: PathBuf,
    buckets: HashMap<String, Vec<PathBuf>>,
    file_count: usize,
}

impl TokenIndex {
    /// Walk `root` and build the index over files with `extension`.
    ///
    /// I/O failures during the walk degrade to a partial index; an
    /// unreadable or missing root produces an empty one.
    pub fn build(root: &Path, extension: &str) -> Self {
        info!("building token index under {}", root.display());
        let files = walker::list_files(root, extension);

        let mut buckets: HashMap<String, Vec<PathBuf>> = HashMap::new();
        for path in &files {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            for token in filename_tokens(name) {
                buckets.entry(token).or_default().push(path.clone());
            }
        }

        info!(
            "indexed {} files into {} token buckets",
            files.len(),
            buckets.len()
        );

        Self {
            root: root.to_path_buf(),
            buckets,
            file_count: files.len(),
        }
    }

    /// Files indexed under `token`, in discovery order.
    pub fn bucket(&self, token: &str) -> Option<&[PathBuf]> {
        self.buckets.get(token).map(Vec::as_slice)
    }

    /// The source folder this index was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of files discovered during the walk.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.buckets.len()
    }
}
