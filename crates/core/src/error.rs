//! Error types for the vector-noise core.

use thiserror::Error;

/// Errors produced while building a gradient field or one of its rasters.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A dimension (lattice width/height, raster size, tile count) was
    /// missing, zero, negative, non-integer, or overflowed `usize`.
    #[error("invalid dimension: {name} {reason}")]
    InvalidDimension { name: &'static str, reason: String },

    /// A pre-built buffer did not hold `width * height` entries.
    #[error("dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

impl NoiseError {
    /// Shorthand for a missing dimension.
    pub(crate) fn missing(name: &'static str) -> Self {
        NoiseError::InvalidDimension {
            name,
            reason: "is required".into(),
        }
    }

    /// Shorthand for a dimension that is present but unusable.
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        NoiseError::InvalidDimension {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects zero for a named dimension.
pub(crate) fn require_positive(name: &'static str, value: usize) -> Result<usize, NoiseError> {
    if value == 0 {
        return Err(NoiseError::invalid(name, "must be positive, got 0"));
    }
    Ok(value)
}

/// Validates both dimensions and returns the cell count, guarding against
/// `width * height` overflow.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, NoiseError> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    width
        .checked_mul(height)
        .ok_or_else(|| NoiseError::invalid("width", format!("x height ({width} x {height}) overflows")))
}
