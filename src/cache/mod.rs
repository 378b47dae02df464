//! Cache Module
//!
//! Provides the in-memory TTL store, cache-key derivation, and the wrapper
//! that memoizes producer calls.

mod clock;
mod entry;
mod global;
mod key;
mod resources;
mod stats;
mod store;
mod wrapper;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use global::{get_cache, install_cache};
pub use key::{build_key, encode_value, ArgValue, CallArgs};
pub use resources::{resource_details_key, resource_list_key};
pub use stats::CacheStats;
pub use store::ResourceCache;
pub use wrapper::{wrap, CachedCall};
