//! Constant values for the nodekey workspace
//!
//! Curve domain parameters and envelope layout constants live here so that
//! the arithmetic and codec crates never hard-code them.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod traditional;

pub use traditional::curves::{CurveConstants, PRIME256V1, SECP256K1, SUPPORTED_CURVES};
