//! Call-Interception Wrapper
//!
//! [`CachedCall`] puts a [`ResourceCache`] in front of a producer so callers
//! get memoized results without knowing the cache exists. A hit returns the
//! stored value; a miss calls the producer and stores its successful result.
//! Producer errors pass through untouched and leave the cache unchanged.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::key::{build_key, CallArgs};
use crate::cache::ResourceCache;

// == Cached Call ==
/// A producer wrapped with caching, built once per operation.
///
/// ```
/// use std::sync::Arc;
/// use resource_cache::{CachedCall, CallArgs, ResourceCache};
/// use serde_json::{json, Value};
///
/// let cache = Arc::new(ResourceCache::default());
/// let list_widgets = CachedCall::new(cache.clone(), "inventory", "list_widgets", |_: &CallArgs| {
///     Ok::<Value, std::io::Error>(json!(["A", "B"]))
/// });
///
/// let widgets = list_widgets.call(&CallArgs::new()).unwrap();
/// assert_eq!(widgets, json!(["A", "B"]));
/// assert_eq!(cache.count(), 1);
/// ```
#[derive(Debug)]
pub struct CachedCall<F> {
    cache: Arc<ResourceCache>,
    prefix: String,
    operation: String,
    ttl: Duration,
    producer: F,
}

impl<F> CachedCall<F> {
    /// Wraps `producer` using the cache's default TTL.
    ///
    /// `operation` names the producer; together with `prefix` it keeps keys of
    /// different operations apart.
    pub fn new(
        cache: Arc<ResourceCache>,
        prefix: impl Into<String>,
        operation: impl Into<String>,
        producer: F,
    ) -> Self {
        let ttl = cache.default_ttl();
        Self {
            cache,
            prefix: prefix.into(),
            operation: operation.into(),
            ttl,
            producer,
        }
    }

    /// Overrides the TTL for results of this operation.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// The key a call with `args` reads and writes.
    pub fn key_for(&self, args: &CallArgs) -> String {
        build_key(&self.prefix, &self.operation, args)
    }

    /// TTL applied to results stored by this operation.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        let cached = self.cache.get(key);
        if cached.is_some() {
            debug!(key, operation = %self.operation, "Cache hit");
        }
        cached
    }

    fn store(&self, key: String, value: &Value) {
        debug!(key = %key, operation = %self.operation, "Cache miss, stored producer result");
        self.cache.set_with_ttl(key, value.clone(), self.ttl);
    }

    // == Call ==
    /// Returns the cached result for `args`, calling the producer on a miss.
    pub fn call<E>(&self, args: &CallArgs) -> Result<Value, E>
    where
        F: Fn(&CallArgs) -> Result<Value, E>,
    {
        let key = self.key_for(args);
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        match (self.producer)(args) {
            Ok(value) => {
                self.store(key, &value);
                Ok(value)
            }
            Err(err) => {
                debug!(key = %key, operation = %self.operation, "Producer failed, nothing cached");
                Err(err)
            }
        }
    }

    // == Call Async ==
    /// Async counterpart of [`CachedCall::call`] for producers returning futures.
    ///
    /// The store lock is released before the producer is awaited.
    pub async fn call_async<Fut, E>(&self, args: &CallArgs) -> Result<Value, E>
    where
        F: Fn(&CallArgs) -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let key = self.key_for(args);
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        match (self.producer)(args).await {
            Ok(value) => {
                self.store(key, &value);
                Ok(value)
            }
            Err(err) => {
                debug!(key = %key, operation = %self.operation, "Producer failed, nothing cached");
                Err(err)
            }
        }
    }
}

// == Wrap ==
/// Wraps `producer` with an explicit TTL. Shorthand for
/// `CachedCall::new(..).with_ttl(ttl)`.
pub fn wrap<F>(
    cache: &Arc<ResourceCache>,
    prefix: &str,
    operation: &str,
    ttl: Duration,
    producer: F,
) -> CachedCall<F> {
    CachedCall::new(Arc::clone(cache), prefix, operation, producer).with_ttl(ttl)
}
