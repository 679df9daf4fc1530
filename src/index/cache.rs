//! Concurrent memo of filtered candidate sets
//!
//! Keys are [`LetterKnowledge`] snapshots; values are the sorted ids of the words that satisfy
//! that knowledge. Tried words are left out of the key so hypothetical states that differ only
//! in the guess they tried share one entry; callers subtract tried words per query.

use crate::core::LetterKnowledge;
use dashmap::DashMap;
use log::warn;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Position of a word inside a [`super::WordIndex`]
pub type WordId = u32;

/// Shared, sorted candidate id set
pub type CandidateIds = Arc<[WordId]>;

/// Default bound on stored entries
pub const DEFAULT_CACHE_CAPACITY: usize = 1_000_000;

/// Counters describing cache effectiveness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Number of times a full cache was cut back to half its capacity
    pub evictions: u64,
    pub entries: usize,
}

impl CacheStats {
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Partition-size cache shared by all scoring workers
///
/// A miss computes without holding any lock, then inserts only if the key is still absent.
/// Two workers racing on one key both compute, and both return the value that was stored
/// first. When `capacity` entries are held, entries are evicted until half the capacity is
/// left, then the new entry is inserted.
pub struct PartitionCache {
    entries: DashMap<LetterKnowledge, CandidateIds, FxBuildHasher>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl PartitionCache {
    /// A capacity of zero disables storing entries
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the cached ids for `key`, computing and storing them if absent
    pub fn get_or_compute<F>(&self, key: &LetterKnowledge, compute: F) -> CandidateIds
    where
        F: FnOnce() -> Vec<WordId>,
    {
        if let Some(hit) = self.entries.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(hit.value());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let computed: CandidateIds = compute().into();
        if self.capacity == 0 {
            return computed;
        }

        if self.entries.len() >= self.capacity {
            self.evict_to(self.capacity / 2);
        }

        let stored = self.entries.entry(key.clone()).or_insert(computed);
        Arc::clone(stored.value())
    }

    /// Drop entries in shard order until at most `keep` remain
    fn evict_to(&self, keep: usize) {
        let mut kept = 0;
        self.entries.retain(|_, _| {
            kept += 1;
            kept <= keep
        });
        self.evictions.fetch_add(1, Ordering::Relaxed);
        warn!(
            "partition cache reached {} entries, evicted down to {}",
            self.capacity,
            self.entries.len()
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}

impl Default for PartitionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
