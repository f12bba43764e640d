//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; the implementation lives in
//! `crate::infrastructure::memory`.
//!
//! # Available Repositories
//!
//! - [`EntityRepository`] - CRUD over one entity collection
//! - [`ArticleIndex`] - Relationship-filtered article queries
//!
//! # Testing
//!
//! [`ArticleIndex`] has a `mockall` mock under `cfg(test)`. See
//! `tests/repository_in_memory.rs` for the in-memory implementation.

pub mod article_index;
pub mod entity_repository;

pub use article_index::ArticleIndex;
pub use entity_repository::EntityRepository;

#[cfg(test)]
pub use article_index::MockArticleIndex;
