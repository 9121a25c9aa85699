//! Periodic 2D gradient noise.
//!
//! A [`GradientField`] owns a [`Lattice`] of unit gradients and turns it into
//! a continuous scalar field: each sample takes the dot products of the four
//! surrounding gradients with the offsets from their corners, blends them
//! with the quintic [`smooth`] curve, and rescales the result into [0, 1].
//!
//! Coordinates wrap modulo the lattice size, so the field tiles seamlessly:
//! `sample(x, y) == sample(x + k * width, y + m * height)` for integers
//! `k`, `m` whenever both coordinates are exactly representable.

use crate::config::NoiseConfig;
use crate::error::{cell_count, require_positive, NoiseError};
use crate::field::Field;
use crate::lattice::Lattice;
use crate::math::{dot, floor, lerp, smooth};
use crate::prng::{RandomSource, Xorshift64};
use glam::DVec2;
use serde_json::Value;

/// Continuous, tileable gradient noise over a random unit-vector lattice.
///
/// Immutable after construction; `sample` is a pure read of the lattice, so a
/// field can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct GradientField {
    lattice: Lattice,
}

impl GradientField {
    /// Creates a `width × height` field with gradients drawn from
    /// [`Xorshift64`] seeded with `seed`.
    ///
    /// Returns `NoiseError::InvalidDimension` if either dimension is zero.
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self, NoiseError> {
        Self::with_source(width, height, &mut Xorshift64::new(seed))
    }

    /// Creates a square field; height inherits `width`.
    pub fn square(width: usize, seed: u64) -> Result<Self, NoiseError> {
        Self::new(width, width, seed)
    }

    /// Creates a field drawing its gradients from `rng`.
    ///
    /// Makes exactly `width * height` gradient draws (two uniform values
    /// each), column by column.
    pub fn with_source<R: RandomSource + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, NoiseError> {
        let lattice = Lattice::random(width, height, rng)?;
        log::debug!("built {width}x{height} gradient lattice");
        Ok(Self { lattice })
    }

    /// Creates a field from a JSON params object.
    ///
    /// `width` is required; `height` defaults to `width` and `seed` to
    /// [`DEFAULT_SEED`](crate::config::DEFAULT_SEED).
    pub fn from_json(params: &Value) -> Result<Self, NoiseError> {
        NoiseConfig::from_json(params)?.build()
    }

    /// Wraps a pre-built lattice.
    ///
    /// Intended for tests and fixtures that need exact gradients. Non-unit
    /// vectors are accepted but logged, since they break the [0, 1] range
    /// guarantee.
    pub fn from_lattice(lattice: Lattice) -> Self {
        let non_unit = lattice.non_unit_count();
        if non_unit > 0 {
            log::warn!(
                "lattice {}x{} has {non_unit} non-unit gradient(s)",
                lattice.width(),
                lattice.height()
            );
        }
        Self { lattice }
    }

    /// Lattice width, the period along x.
    pub fn width(&self) -> usize {
        self.lattice.width()
    }

    /// Lattice height, the period along y.
    pub fn height(&self) -> usize {
        self.lattice.height()
    }

    /// The underlying gradient lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Noise value at `(x, y)`, in [0, 1].
    ///
    /// Any finite coordinate is valid; values outside the lattice wrap.
    /// Integer coordinates always yield exactly 0.5. Non-finite input
    /// yields NaN.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let w = self.lattice.width();
        let h = self.lattice.height();
        let x = wrap(x, w);
        let y = wrap(y, h);

        let xf = cell_index(x, w);
        let yf = cell_index(y, h);
        let xc = (xf + 1) % w;
        let yc = (yf + 1) % h;

        let fx = x - xf as f64;
        let fy = y - yf as f64;
        // Offsets to the far corners are taken as if the lattice continued
        // past its edge, even when xc/yc wrapped to 0.
        let dcx = fx - 1.0;
        let dcy = fy - 1.0;

        let g = &self.lattice;
        let n00 = dot(g.get(xf, yf), DVec2::new(fx, fy));
        let n01 = dot(g.get(xf, yc), DVec2::new(fx, dcy));
        let n10 = dot(g.get(xc, yf), DVec2::new(dcx, fy));
        let n11 = dot(g.get(xc, yc), DVec2::new(dcx, dcy));

        let sx = smooth(fx);
        let sy = smooth(fy);
        let value = lerp(lerp(n00, n01, sy), lerp(n10, n11, sy), sx);
        (value + 1.0) / 2.0
    }

    /// Samples the field onto an `out_width × out_height` raster.
    ///
    /// The raster spans `tiles_x` periods horizontally and `tiles_y`
    /// vertically: pixel `(px, py)` reads `sample(px * step_x, py * step_y)`
    /// with `step_x = width * tiles_x / out_width`.
    pub fn raster(
        &self,
        out_width: usize,
        out_height: usize,
        tiles_x: usize,
        tiles_y: usize,
    ) -> Result<Field, NoiseError> {
        require_positive("out_width", out_width)?;
        require_positive("out_height", out_height)?;
        require_positive("tiles_x", tiles_x)?;
        require_positive("tiles_y", tiles_y)?;
        let len = cell_count(out_width, out_height)?;

        let span_x = self.width() as f64 * tiles_x as f64;
        let span_y = self.height() as f64 * tiles_y as f64;
        let step_x = span_x / out_width as f64;
        let step_y = span_y / out_height as f64;

        let mut data = Vec::with_capacity(len);
        for py in 0..out_height {
            let y = py as f64 * step_y;
            data.extend((0..out_width).map(|px| self.sample(px as f64 * step_x, y)));
        }
        log::debug!(
            "rastered {}x{} lattice to {out_width}x{out_height} ({tiles_x}x{tiles_y} tiles)",
            self.width(),
            self.height()
        );
        Field::from_data(out_width, out_height, data)
    }
}

/// Reduces `v` into `[0, period)`.
///
/// `rem_euclid` can round a tiny negative input up to the period itself;
/// that aliases to 0, as does -0.0.
fn wrap(v: f64, period: usize) -> f64 {
    let p = period as f64;
    let r = v.rem_euclid(p);
    if r >= p || r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Lattice cell containing an already-wrapped coordinate.
fn cell_index(v: f64, period: usize) -> usize {
    (floor(v).max(0) as usize).min(period - 1)
}
