//! Constants for elliptic-curve keys and their envelopes

pub mod curves;
pub mod envelope;
