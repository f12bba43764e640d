//! In-memory repository implementations.
//!
//! - [`InMemoryNewsroom`] - Lock-guarded owner of all collections
//! - [`seed`] - Optional demo data set

pub mod in_memory_newsroom;
pub mod seed;

pub use in_memory_newsroom::InMemoryNewsroom;
