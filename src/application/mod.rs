//! Application layer services.
//!
//! Services sit between HTTP handlers and the repository traits, converting
//! domain errors into [`crate::error::AppError`] and logging mutations.
//!
//! # Available Services
//!
//! - [`services::resource_service::ResourceService`] - CRUD for one entity collection
//! - [`services::relation_service::RelationService`] - Articles by journalist or category

pub mod services;
