//! Cache Store Module
//!
//! Main cache engine: a string-keyed map of expiring entries behind a single
//! mutex. Expiration is checked lazily on read; nothing runs in the background.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::stats::Counters;
use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::config::CacheConfig;

// == Store State ==
#[derive(Debug, Default)]
struct StoreState {
    entries: HashMap<String, CacheEntry>,
    counters: Counters,
}

// == Resource Cache ==
/// Process-local TTL cache for remote lookup results.
///
/// Share it as `Arc<ResourceCache>`; every operation takes `&self`.
#[derive(Debug)]
pub struct ResourceCache {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
    default_ttl: Duration,
}

impl ResourceCache {
    // == Constructor ==
    /// Creates an empty cache reading the wall clock.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by the given clock.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            clock,
            default_ttl: config.default_ttl(),
        }
    }

    /// TTL applied by [`ResourceCache::set`].
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // A poisoned lock means a panic inside one of the short critical sections
    // below, which never run caller code. That is a bug in this module.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("resource cache lock poisoned")
    }

    // == Get ==
    /// Returns the stored value if present and not yet expired.
    ///
    /// Expired entries read as a miss but stay in place until overwritten or
    /// purged. Reads never extend an entry's lifetime.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();
        let mut state = self.lock();

        let value = match state.entries.get(key) {
            Some(entry) if entry.is_valid_at(now) => Some(entry.value.clone()),
            Some(_) => {
                debug!(key, "Cache expired");
                None
            }
            None => None,
        };

        if value.is_some() {
            state.counters.record_hit();
        } else {
            state.counters.record_miss();
        }
        value
    }

    // == Peek ==
    /// Like [`ResourceCache::get`] but leaves the hit/miss counters alone.
    ///
    /// Used by inspection paths that should not skew the hit rate.
    pub fn peek(&self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();
        self.lock()
            .entries
            .get(key)
            .filter(|entry| entry.is_valid_at(now))
            .map(|entry| entry.value.clone())
    }

    // == Contains ==
    /// Whether a valid entry exists, without touching the hit/miss counters.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.lock()
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_valid_at(now))
    }

    // == Set ==
    /// Stores a value with the default TTL.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Stores a value that expires `ttl` from now.
    ///
    /// An existing entry under the same key, expired or not, is overwritten
    /// in place.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: Value, ttl: Duration) {
        let key = key.into();
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);
        debug!(key = %key, ttl_secs = ttl.as_secs(), "Cached value");
        self.lock().entries.insert(key, entry);
    }

    // == Clear ==
    /// Removes every entry. Returns how many were removed.
    ///
    /// Hit/miss counters survive a clear.
    pub fn clear(&self) -> usize {
        let removed = {
            let mut state = self.lock();
            let removed = state.entries.len();
            state.entries.clear();
            removed
        };
        debug!(removed, "Cache cleared");
        removed
    }

    // == Purge Expired ==
    /// Removes all expired entries. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.retain(|_, entry| entry.is_valid_at(now));
        let removed = before - state.entries.len();
        if removed > 0 {
            debug!(removed, "Purged expired entries");
        }
        removed
    }

    // == Count ==
    /// Number of entries held, including expired ones not yet removed.
    pub fn count(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    // == Approximate Size ==
    /// Best-effort serialized size of all stored values in bytes.
    ///
    /// Values that fail to serialize count as zero; this never fails.
    pub fn approximate_size(&self) -> usize {
        approximate_size_of(self.lock().entries.values())
    }

    // == Stats ==
    /// Returns a snapshot of cache statistics without modifying entries.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            total_entries: state.entries.len(),
            cache_size_bytes: approximate_size_of(state.entries.values()),
            hits: state.counters.hits,
            misses: state.counters.misses,
        }
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

fn approximate_size_of<'a>(entries: impl Iterator<Item = &'a CacheEntry>) -> usize {
    entries
        .map(|entry| serde_json::to_vec(&entry.value).map_or(0, |bytes| bytes.len()))
        .sum()
}
