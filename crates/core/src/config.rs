//! Reproducible recipe for a gradient field.
//!
//! A [`NoiseConfig`] captures everything needed to rebuild a field: lattice
//! width, optional height (defaults to width), and PRNG seed. Two equal
//! configs build bit-identical fields.

use crate::error::{cell_count, NoiseError};
use crate::gradient::GradientField;
use crate::params::{param_dimension, param_u64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seed used when a config does not name one.
pub const DEFAULT_SEED: u64 = 42;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Serializable construction parameters for a [`GradientField`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoiseConfig {
    pub width: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl NoiseConfig {
    /// Square config; height follows width until [`with_height`](Self::with_height) is called.
    pub fn new(width: usize, seed: u64) -> Self {
        Self {
            width,
            height: None,
            seed,
        }
    }

    /// Sets an explicit height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Effective height: the explicit one, or the width.
    pub fn height(&self) -> usize {
        self.height.unwrap_or(self.width)
    }

    /// Checks that both dimensions are non-zero and that `width * height`
    /// does not overflow.
    pub fn validate(&self) -> Result<(), NoiseError> {
        cell_count(self.width, self.height()).map(|_| ())
    }

    /// Reads `width` (required), `height`, and `seed` from a JSON object.
    pub fn from_json(params: &Value) -> Result<Self, NoiseError> {
        let width = param_dimension(params, "width")?.ok_or_else(|| NoiseError::missing("width"))?;
        let height = param_dimension(params, "height")?;
        let seed = param_u64(params, "seed", DEFAULT_SEED);
        Ok(Self {
            width,
            height,
            seed,
        })
    }

    /// Builds the field this config describes.
    pub fn build(&self) -> Result<GradientField, NoiseError> {
        GradientField::new(self.width, self.height(), self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_is_square_with_given_seed() {
        let config = NoiseConfig::new(10, 7);
        assert_eq!(config.width, 10);
        assert_eq!(config.height(), 10);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn with_height_overrides_width() {
        let config = NoiseConfig::new(5, 1).with_height(10);
        assert_eq!(config.height(), 10);
    }

    #[test]
    fn from_json_defaults_height_and_seed() {
        let config = NoiseConfig::from_json(&json!({"width": 10})).unwrap();
        assert_eq!(config, NoiseConfig::new(10, DEFAULT_SEED));
        let field = config.build().unwrap();
        assert_eq!(field.width(), 10);
        assert_eq!(field.height(), 10);
    }

    #[test]
    fn from_json_reads_all_keys() {
        let config = NoiseConfig::from_json(&json!({"width": 5, "height": 3, "seed": 99})).unwrap();
        assert_eq!(config, NoiseConfig::new(5, 99).with_height(3));
    }

    #[test]
    fn from_json_without_width_is_invalid_dimension() {
        let err = NoiseConfig::from_json(&json!({"height": 4})).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidDimension { name: "width", .. }));
        assert!(err.to_string().contains("required"), "got: {err}");
    }

    #[test]
    fn from_json_rejects_zero_and_negative_dimensions() {
        assert!(NoiseConfig::from_json(&json!({"width": 0})).is_err());
        assert!(matches!(
            NoiseConfig::from_json(&json!({"width": 4, "height": -2})),
            Err(NoiseError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn gradient_field_from_json_delegates_to_config() {
        let a = GradientField::from_json(&json!({"width": 6, "seed": 3})).unwrap();
        let b = NoiseConfig::new(6, 3).build().unwrap();
        assert_eq!(a.lattice(), b.lattice());
        assert!(GradientField::from_json(&json!({})).is_err());
    }

    #[test]
    fn validate_rejects_zero_and_overflow() {
        assert!(NoiseConfig::new(4, 1).validate().is_ok());
        assert!(NoiseConfig::new(0, 1).validate().is_err());
        assert!(NoiseConfig::new(4, 1).with_height(0).validate().is_err());
        assert!(NoiseConfig::new(usize::MAX, 1).with_height(2).validate().is_err());
    }

    #[test]
    fn build_rejects_zero_height() {
        let result = NoiseConfig::new(4, 1).with_height(0).build();
        assert!(matches!(
            result,
            Err(NoiseError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn equal_configs_build_identical_fields() {
        let config = NoiseConfig::new(9, 2024).with_height(4);
        let a = config.build().unwrap();
        let b = config.clone().build().unwrap();
        assert_eq!(a.lattice(), b.lattice());
    }

    #[test]
    fn json_round_trip() {
        let config = NoiseConfig::new(32, 8675309).with_height(16);
        let json = serde_json::to_string(&config).unwrap();
        let restored: NoiseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn deserialize_fills_defaults() {
        let config: NoiseConfig = serde_json::from_str(r#"{"width": 12}"#).unwrap();
        assert_eq!(config.height, None);
        assert_eq!(config.height(), 12);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn square_config_omits_height_key() {
        let v = serde_json::to_value(NoiseConfig::new(8, 1)).unwrap();
        assert!(v.get("width").is_some());
        assert!(v.get("seed").is_some());
        assert!(v.get("height").is_none());
    }
}
