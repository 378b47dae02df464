//! Error types for the resource cache
//!
//! Provides unified error handling using thiserror. Producer failures are not
//! represented here: they pass through the cache with their own type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the cache's own surfaces.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No valid entry for the requested key
    #[error("Key not found: {0}")]
    NotFound(String),

    /// The process-wide cache was already constructed
    #[error("Process-wide cache is already initialized")]
    AlreadyInitialized,
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::AlreadyInitialized => StatusCode::CONFLICT,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the resource cache.
pub type Result<T> = std::result::Result<T, CacheError>;
