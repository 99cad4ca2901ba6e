//! Internal utilities for the nodekey workspace
//!
//! Not part of the public API; collaborators should not depend on anything
//! exported here.

#![forbid(unsafe_code)]

pub mod constant_time;
