//! Traits implemented by nodekey key types

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
