//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                    - Health check with collection sizes
//! - `/articles`, `/journalists`, `/categories` - CRUD (see [`crate::api::routes`])
//! - `GET  /journalists/{id}/articles` - Articles by journalist
//! - `GET  /categories/{id}/articles`  - Articles by category
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
