//! Process-lifetime memo of previously constructed image URLs.
//!
//! Once an image's primary URL has been built, later instances of the same
//! request skip lazy loading and fade-in: the host's own cache makes eager
//! display cheap. The set only grows; nothing is ever evicted.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::domain::request::RenderRequest;
use crate::infrastructure::cloudinary::primary_url;

/// Seen-URL set backing the dedup check.
#[derive(Debug, Default)]
pub struct SeenCache {
    seen: Mutex<HashSet<String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SeenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether this exact request was constructed before.
    ///
    /// The key is the size-suffixed primary URL. Returns true and leaves the
    /// set untouched on a repeat; records the URL and returns false on first
    /// sight.
    pub fn check(&self, request: &RenderRequest) -> bool {
        let url = primary_url(request);
        let mut seen = self.seen.lock();
        if seen.contains(&url) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(url = %url, "Seen cache hit");
            true
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(url = %url, "Seen cache miss");
            seen.insert(url);
            false
        }
    }

    /// Number of distinct URLs recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns cache statistics.
    #[must_use]
    pub fn stats(&self) -> SeenCacheStats {
        SeenCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.len(),
        }
    }

    /// Forgets everything. Intended for test isolation; production contexts
    /// keep the set for the process lifetime.
    pub fn reset(&self) {
        let mut seen = self.seen.lock();
        seen.clear();
        debug!("Reset seen cache");
    }
}

/// Statistics about dedup check outcomes.
#[derive(Debug, Clone)]
pub struct SeenCacheStats {
    /// Repeat constructions (lazy behavior skipped).
    pub hits: u64,
    /// First-time constructions.
    pub misses: u64,
    /// Distinct URLs recorded.
    pub size: usize,
}

impl std::fmt::Display for SeenCacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Seen cache: {} urls ({} hits, {} misses)",
            self.size, self.hits, self.misses
        )
    }
}
