//! API Handlers
//!
//! HTTP request handlers for the cache admin endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::{resource_details_key, resource_list_key, ResourceCache};
use crate::error::{CacheError, Result};
use crate::models::{ClearResponse, HealthResponse, ResourceResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache synchronizes internally, so handlers only need the `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared resource cache
    pub cache: Arc<ResourceCache>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: Arc<ResourceCache>) -> Self {
        Self { cache }
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics. Does not modify the cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for DELETE /cache
///
/// Drops every cached entry.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.clear();
    info!(cleared, "Cache cleared via admin API");

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /resources/:resource_type
///
/// Returns the cached resource list for a type. Admin reads do not count as
/// hits or misses.
pub async fn resource_list_handler(
    State(state): State<AppState>,
    Path(resource_type): Path<String>,
) -> Result<Json<ResourceResponse>> {
    let key = resource_list_key(&resource_type);
    let value = state
        .cache
        .peek(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(ResourceResponse::new(key, value)))
}

/// Handler for GET /resources/:resource_type/:resource_id
///
/// Returns the cached details of one resource, without touching counters.
pub async fn resource_details_handler(
    State(state): State<AppState>,
    Path((resource_type, resource_id)): Path<(String, String)>,
) -> Result<Json<ResourceResponse>> {
    let key = resource_details_key(&resource_type, &resource_id);
    let value = state
        .cache
        .peek(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(ResourceResponse::new(key, value)))
}

/// Handler for GET /health
///
/// Returns health status.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
