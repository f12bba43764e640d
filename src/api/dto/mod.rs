//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Create requests
//! use validator for the required-field presence checks. JSON field names are
//! camelCase.

pub mod article;
pub mod category;
pub mod health;
pub mod journalist;
