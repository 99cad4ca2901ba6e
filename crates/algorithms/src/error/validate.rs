//! Validation utilities for primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a structural condition of DER input
#[inline(always)]
pub fn tlv(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::tlv(context, details));
    }
    Ok(())
}

/// Validate that `needed` bytes are left in an input with `available` bytes
#[inline(always)]
pub fn remaining(context: &'static str, available: usize, needed: usize) -> Result<()> {
    if available < needed {
        return Err(Error::tlv(
            context,
            format!("needs {} bytes, only {} remain", needed, available),
        ));
    }
    Ok(())
}

/// Validate a point condition
#[inline(always)]
pub fn point(condition: bool, curve: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPoint { curve, details });
    }
    Ok(())
}
