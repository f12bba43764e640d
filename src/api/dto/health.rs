//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with collection sizes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub collections: CollectionCounts,
}

/// Number of entities currently held in each collection.
#[derive(Debug, Serialize)]
pub struct CollectionCounts {
    pub articles: usize,
    pub journalists: usize,
    pub categories: usize,
}
