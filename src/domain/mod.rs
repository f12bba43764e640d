//! Domain layer containing entities and the in-memory relational store.
//!
//! # Architecture
//!
//! - [`entities`] - Articles, journalists and categories with their create/update inputs
//! - [`store`] - [`store::EntityStore`], the ordered collection with id assignment
//! - [`relations`] - [`relations::RelationalIndex`], relationship-filtered article queries
//! - [`newsroom`] - [`newsroom::Newsroom`], the aggregate owning all collections
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store operations are synchronous; repositories add the async boundary
//! - Foreign keys on articles are not enforced and may dangle

pub mod entities;
pub mod newsroom;
pub mod relations;
pub mod repositories;
pub mod store;

pub use newsroom::{Collection, Newsroom};
pub use store::{EntityStore, IdStrategy, StoreError};
