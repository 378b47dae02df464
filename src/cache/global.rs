//! Process-wide Cache
//!
//! One shared [`ResourceCache`] per process. Hosts either install it
//! explicitly at startup or let the first [`get_cache`] call build it from
//! the environment. Code below the host should receive the `Arc` explicitly.

use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::cache::ResourceCache;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

static SHARED_CACHE: OnceLock<Arc<ResourceCache>> = OnceLock::new();

/// Returns the shared cache, building it from [`CacheConfig::from_env`] on
/// first use.
pub fn get_cache() -> Arc<ResourceCache> {
    SHARED_CACHE
        .get_or_init(|| {
            let config = CacheConfig::from_env();
            info!(default_ttl = config.default_ttl, "Resource cache initialized");
            Arc::new(ResourceCache::new(&config))
        })
        .clone()
}

/// Installs `cache` as the shared instance.
///
/// Fails with [`CacheError::AlreadyInitialized`] once the shared cache exists,
/// whether it came from an earlier install or from [`get_cache`].
pub fn install_cache(cache: ResourceCache) -> Result<Arc<ResourceCache>> {
    let cache = Arc::new(cache);
    SHARED_CACHE
        .set(Arc::clone(&cache))
        .map_err(|_| CacheError::AlreadyInitialized)?;
    info!(default_ttl_secs = cache.default_ttl().as_secs(), "Resource cache installed");
    Ok(cache)
}
