//! Public API traits and types for the nodekey workspace
//!
//! This crate provides the public API surface shared by every nodekey
//! component: the closed error taxonomy returned to collaborators and the
//! encoding traits implemented by key types.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{Serialize, SerializeSecret};
