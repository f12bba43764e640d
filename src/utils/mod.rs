//! Utility functions for request handling.
//!
//! - [`parse_id`] - Lenient integer parsing of id path segments

pub mod parse_id;

pub use parse_id::parse_id;
