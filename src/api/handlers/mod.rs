//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod relations;
pub mod resources;

pub use health::health_handler;
pub use relations::{category_articles_handler, journalist_articles_handler};
pub use resources::{create_handler, delete_handler, get_handler, list_handler, update_handler};
