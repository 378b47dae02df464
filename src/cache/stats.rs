//! Cache Statistics Module
//!
//! Aggregate view of the store: entry count, approximate footprint, and
//! hit/miss counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries currently held, including expired ones not yet overwritten
    pub total_entries: usize,
    /// Approximate serialized size of all stored values
    pub cache_size_bytes: usize,
    /// Reads that found a valid entry
    pub hits: u64,
    /// Reads that found nothing or an expired entry
    pub misses: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Counters ==
/// Hit/miss counters kept alongside the entry map.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Counters {
    pub hits: u64,
    pub misses: u64,
}

impl Counters {
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }
}
