//! # Newsroom
//!
//! An in-memory REST service for articles, journalists and categories, built
//! with Axum.
//!
//! ## Architecture
//!
//! The crate keeps clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the in-memory relational store and repository traits
//! - **Application Layer** ([`application`]) - Service orchestration and error translation
//! - **Infrastructure Layer** ([`infrastructure`]) - Lock-guarded in-memory repository and seed data
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - CRUD for articles, journalists and categories
//! - Articles by journalist and by category
//! - Configurable id assignment (monotonic or legacy length-based)
//! - Optional demo data set
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --seed
//! curl http://localhost:3000/journalists/1/articles
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RelationService, ResourceService};
    pub use crate::domain::entities::{Article, Category, Journalist};
    pub use crate::domain::{IdStrategy, Newsroom, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryNewsroom;
    pub use crate::state::AppState;
}
