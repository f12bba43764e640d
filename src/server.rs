//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store, wires the services and runs the Axum server
//! until Ctrl+C.

use crate::config::Config;
use crate::domain::Newsroom;
use crate::infrastructure::memory::{InMemoryNewsroom, seed};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory collections (empty, or the demo data set when seeding)
/// - Application services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Seed data cannot be inserted
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let newsroom = build_newsroom(&config)?;
    tracing::info!(
        articles = newsroom.articles.len(),
        journalists = newsroom.journalists.len(),
        categories = newsroom.categories.len(),
        "In-memory store ready"
    );

    let repository = Arc::new(InMemoryNewsroom::with_newsroom(newsroom));
    let state = AppState::new(repository);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_newsroom(config: &Config) -> Result<Newsroom> {
    if config.seed_data {
        let newsroom = seed::seeded(config.id_strategy).context("Failed to load seed data")?;
        tracing::info!("Seed data loaded");
        Ok(newsroom)
    } else {
        Ok(Newsroom::new(config.id_strategy))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
