//! Numeric primitives for gradient noise.
//!
//! Pure, total functions. Vectors are [`DVec2`]; an absent vector is the
//! zero vector (`DVec2::default()`), so [`dot`] with it is always 0.

use crate::prng::RandomSource;
use glam::DVec2;

/// Offset subtracted from each uniform draw so directions center on the origin.
const CENTER: f64 = 0.5;

/// Largest integer less than or equal to `n`.
///
/// Out-of-range values saturate and NaN maps to 0, following `as` casts.
pub fn floor(n: f64) -> i64 {
    n.floor() as i64
}

/// Linear interpolation `a + t * (b - a)`. Not clamped: `t` outside [0, 1]
/// extrapolates.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Two-component dot product.
pub fn dot(v1: DVec2, v2: DVec2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Scales `v` to unit length.
///
/// A zero vector has no direction; its components come back non-finite.
pub fn normalize(v: DVec2) -> DVec2 {
    let mag = dot(v, v).sqrt();
    DVec2::new(v.x / mag, v.y / mag)
}

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1, which hides the lattice
/// seams in the interpolated field.
pub fn smooth(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Unit vector pointing along already-centered offsets `(dx, dy)`.
pub fn direction_from_offsets(dx: f64, dy: f64) -> DVec2 {
    normalize(DVec2::new(dx, dy))
}

/// Draws a uniformly directed unit vector.
///
/// Consumes exactly two values from `rng` (x first), centers each on the
/// origin, and normalizes.
pub fn random_unit_vector<R: RandomSource + ?Sized>(rng: &mut R) -> DVec2 {
    let dx = rng.next_f64() - CENTER;
    let dy = rng.next_f64() - CENTER;
    direction_from_offsets(dx, dy)
}
