//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use serde_json::Value;

use crate::cache::clock::duration_ms;

// == Cache Entry ==
/// A cached producer result and its expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Time-to-live the entry was written with
    pub ttl: Duration,
    /// Expiration timestamp (Unix milliseconds), always `created_at + ttl`
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry written at `now_ms`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `now_ms` - Write time in Unix milliseconds
    /// * `ttl` - How long the entry stays valid
    pub fn new(value: Value, now_ms: u64, ttl: Duration) -> Self {
        Self {
            value,
            created_at: now_ms,
            ttl,
            expires_at: now_ms.saturating_add(duration_ms(ttl)),
        }
    }

    // == Validity ==
    /// An entry is valid iff `now_ms` is strictly before its expiration time.
    pub fn is_valid_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at
    }

    /// Inverse of [`CacheEntry::is_valid_at`].
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        !self.is_valid_at(now_ms)
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, zero once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}
