//! Arithmetic and encoding primitives for nodekey
//!
//! This crate provides the building blocks the key layer is assembled from:
//!
//! - [`field`]: modular arithmetic over an arbitrary prime field
//! - [`ec`]: short Weierstrass curves, the affine group law, SEC1 point
//!   encoding and the read-only curve registry
//! - [`der`]: a strict tag-length-value codec for the DER subset used by
//!   key envelopes
//!
//! Everything here is pure and thread-safe. Failures are reported through
//! [`Error`], which converts into the workspace-wide `nodekey_api::Error`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Prime-field arithmetic
pub mod field;

// DER codec
pub mod der;
pub use der::{BitString, Field, ObjectIdentifier, Tag};

// Curves, points and the registry
pub mod ec;
pub use ec::{Curve, CurveRegistry, Point};

// Arbitrary-precision integers used throughout the public API
pub use num_bigint::BigInt;
