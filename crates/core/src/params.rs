//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! [`param_u64`] never fails: a missing or mistyped value falls back to the
//! default. [`param_dimension`] is stricter, because a lattice or raster
//! size that is present but unusable must surface as an error.

use crate::error::NoiseError;
use serde_json::Value;

/// Extracts a `u64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    params.get(name).and_then(Value::as_u64).unwrap_or(default)
}

/// Extracts a positive dimension from `params[name]`.
///
/// Returns `Ok(None)` when the key is missing or null. Zero, negative,
/// fractional, and non-numeric values are `NoiseError::InvalidDimension`.
/// Whole floats such as `8.0` are accepted.
pub fn param_dimension(params: &Value, name: &'static str) -> Result<Option<usize>, NoiseError> {
    let value = match params.get(name) {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };
    if let Some(n) = value.as_u64() {
        if n == 0 {
            return Err(NoiseError::invalid(name, "must be positive, got 0"));
        }
        return usize::try_from(n)
            .map(Some)
            .map_err(|_| NoiseError::invalid(name, format!("{n} does not fit in usize")));
    }
    if let Some(n) = value.as_i64() {
        return Err(NoiseError::invalid(name, format!("must be positive, got {n}")));
    }
    match value.as_f64() {
        Some(f) if f >= 1.0 && f.fract() == 0.0 && f <= usize::MAX as f64 => Ok(Some(f as usize)),
        Some(f) if f.fract() != 0.0 => Err(NoiseError::invalid(
            name,
            format!("must be a whole number, got {f}"),
        )),
        Some(f) => Err(NoiseError::invalid(name, format!("must be positive, got {f}"))),
        None => Err(NoiseError::invalid(name, format!("must be a number, got {value}"))),
    }
}
