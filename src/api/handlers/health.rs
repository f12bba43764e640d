//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CollectionCounts, HealthResponse};
use crate::state::AppState;

/// Returns service status and the size of each collection.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "collections": {
///     "articles": 4,
///     "journalists": 3,
///     "categories": 3
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let collections = CollectionCounts {
        articles: state.articles.count().await,
        journalists: state.journalists.count().await,
        categories: state.categories.count().await,
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        collections,
    })
}
