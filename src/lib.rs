//! Resource Cache - process-local memoization for expensive remote lookups
//!
//! Wraps read-only, idempotent producer calls with a TTL-bounded in-memory
//! cache, and exposes statistics plus an optional admin HTTP surface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

pub use api::AppState;
pub use cache::{
    build_key, get_cache, install_cache, wrap, CacheStats, CachedCall, CallArgs, ResourceCache,
};
pub use config::CacheConfig;
pub use error::CacheError;
pub use telemetry::init_tracing;
