#![deny(unsafe_code)]
//! Periodic 2D gradient noise.
//!
//! Provides the math primitives (`floor`, `lerp`, `dot`, `normalize`,
//! `smooth`, `random_unit_vector`), the injectable `RandomSource` with its
//! default `Xorshift64`, the gradient `Lattice`, and `GradientField`, which
//! samples tileable noise in [0, 1] at any real coordinate. `NoiseConfig`
//! and the param helpers build fields from JSON; `Field` holds rasters.

pub mod config;
pub mod error;
pub mod field;
pub mod gradient;
pub mod lattice;
pub mod math;
pub mod params;
pub mod prng;

pub use config::NoiseConfig;
pub use error::NoiseError;
pub use field::Field;
pub use gradient::GradientField;
pub use lattice::Lattice;
pub use prng::{RandomSource, Xorshift64};
