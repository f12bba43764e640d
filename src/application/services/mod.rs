//! Business logic services for the application layer.

pub mod relation_service;
pub mod resource_service;

pub use relation_service::RelationService;
pub use resource_service::ResourceService;
