//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Entries currently held, expired ones included
    pub total_entries: usize,
    /// Approximate serialized size of all stored values
    pub cache_size_bytes: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// When the snapshot was taken, ISO 8601
    pub generated_at: String,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            total_entries: stats.total_entries,
            cache_size_bytes: stats.cache_size_bytes,
            hits: stats.hits,
            misses: stats.misses,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the clear operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries removed
    pub cleared: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cached entries", cleared),
            cleared,
        }
    }
}

/// Response body for cached resource lookups (GET /resources/...)
#[derive(Debug, Clone, Serialize)]
pub struct ResourceResponse {
    /// Cache key the value was found under
    pub key: String,
    /// The cached value
    pub value: Value,
}

impl ResourceResponse {
    /// Creates a new ResourceResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
