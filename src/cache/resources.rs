//! Resource List and Detail Helpers
//!
//! Fixed key schemes for the two common lookups: listing all resources of a
//! type, and describing one resource by id. Both use the default TTL.

use serde_json::Value;

use crate::cache::ResourceCache;

const LIST_NAMESPACE: &str = "resource_list";
const DETAILS_NAMESPACE: &str = "resource_details";

/// Key under which the list of `resource_type` resources is cached.
pub fn resource_list_key(resource_type: &str) -> String {
    format!("{}:{}", LIST_NAMESPACE, resource_type)
}

/// Key under which the details of one resource are cached.
pub fn resource_details_key(resource_type: &str, resource_id: &str) -> String {
    format!("{}:{}:{}", DETAILS_NAMESPACE, resource_type, resource_id)
}

impl ResourceCache {
    /// Caches the list of resources of `resource_type`.
    pub fn cache_resource_list(&self, resource_type: &str, resources: Value) {
        self.set(resource_list_key(resource_type), resources);
    }

    /// Returns the cached list of `resource_type` resources, if still valid.
    pub fn get_cached_resource_list(&self, resource_type: &str) -> Option<Value> {
        self.get(&resource_list_key(resource_type))
    }

    /// Caches the details of one resource.
    pub fn cache_resource_details(&self, resource_type: &str, resource_id: &str, details: Value) {
        self.set(resource_details_key(resource_type, resource_id), details);
    }

    /// Returns the cached details of one resource, if still valid.
    pub fn get_cached_resource_details(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Option<Value> {
        self.get(&resource_details_key(resource_type, resource_id))
    }
}
