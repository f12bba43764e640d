//! Infrastructure layer implementing the domain repository traits.
//!
//! # Modules
//!
//! - [`memory`] - Process-local storage; nothing is persisted across restarts

pub mod memory;
