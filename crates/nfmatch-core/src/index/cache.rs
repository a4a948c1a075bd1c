//! Single-slot, TTL-bound cache for the token index.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;

use super::TokenIndex;

/// How long a built index stays fresh.
pub const DEFAULT_INDEX_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheSlot {
    index: Arc<TokenIndex>,
    built_at: Instant,
}

/// Owns one cached [`TokenIndex`] at a time.
///
/// A lookup returns the cached index only when it was built for the same
/// source folder and is younger than the TTL; anything else triggers a
/// full rebuild, and the slot is swapped only after the walk completes,
/// so readers always hold a fully built snapshot. One instance serves
/// one concurrently-active source folder; use one cache per folder when
/// batches run in parallel.
pub struct IndexCache {
    extension: String,
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl IndexCache {
    /// Cache for files with `extension`, using the default TTL.
    pub fn new(extension: impl Into<String>) -> Self {
        Self::with_ttl(extension, DEFAULT_INDEX_TTL)
    }

    /// Cache with an explicit TTL.
    pub fn with_ttl(extension: impl Into<String>, ttl: Duration) -> Self {
        Self {
            extension: extension.into(),
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// The cached index for `root`, rebuilding when stale, absent, or
    /// built for a different folder.
    pub fn get(&self, root: &Path) -> Arc<TokenIndex> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = slot.as_ref() {
            if cached.index.root() == root && cached.built_at.elapsed() < self.ttl {
                debug!("reusing cached index for {}", root.display());
                return Arc::clone(&cached.index);
            }
        }

        let index = Arc::new(TokenIndex::build(root, &self.extension));
        *slot = Some(CacheSlot {
            index: Arc::clone(&index),
            built_at: Instant::now(),
        });
        index
    }

    /// Drop the cached index unconditionally; the next lookup rebuilds.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        debug!("index cache invalidated");
    }
}
