//! Parameter checks shared by the curve constructors.
//!
//! Every check returns the validated value on success so constructors can
//! be written as a straight run of `?` expressions.

use crate::error::{Error, Result};

/// Require a non-zero integer frequency or winding number.
pub fn positive_int(name: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(Error::invalid(name, "must be a positive integer, got 0"));
    }
    Ok(value)
}

/// Require a non-zero step count.
pub fn steps(value: usize) -> Result<usize> {
    if value == 0 {
        return Err(Error::invalid("steps", "must be at least 1"));
    }
    Ok(value)
}

/// Require a finite value.
pub fn finite(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid(name, format!("must be finite, got {value}")));
    }
    Ok(value)
}

/// Require a finite, strictly positive value.
pub fn positive(name: &'static str, value: f64) -> Result<f64> {
    let value = finite(name, value)?;
    if value <= 0.0 {
        return Err(Error::invalid(name, format!("must be positive, got {value}")));
    }
    Ok(value)
}
