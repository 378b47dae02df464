//! API Module
//!
//! Admin HTTP surface for the resource cache. Hosts mount the router to
//! inspect or reset the cache at runtime.
//!
//! # Endpoints
//! - `GET /stats` - Cache statistics
//! - `DELETE /cache` - Clear all entries
//! - `GET /resources/:resource_type` - Cached resource list
//! - `GET /resources/:resource_type/:resource_id` - Cached resource details
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
