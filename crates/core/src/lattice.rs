//! The gradient lattice: a `width × height` grid of direction vectors.
//!
//! Storage is column-major (`index = x * height + y`), so a column of the
//! lattice is contiguous. Lattices are built once and never mutated.

use crate::error::{cell_count, NoiseError};
use crate::math::random_unit_vector;
use crate::prng::RandomSource;
use glam::DVec2;

/// Tolerance used when checking that a vector has unit length.
const UNIT_TOLERANCE: f64 = 1e-9;

/// A 2D grid of gradient vectors addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    width: usize,
    height: usize,
    vectors: Vec<DVec2>,
}

impl Lattice {
    /// Fills a lattice with one [`random_unit_vector`] per cell.
    ///
    /// Cells are drawn column by column (x outer, y inner), consuming exactly
    /// `2 * width * height` values from `rng`.
    pub fn random<R: RandomSource + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, NoiseError> {
        let len = cell_count(width, height)?;
        let vectors = (0..len).map(|_| random_unit_vector(rng)).collect();
        Ok(Self {
            width,
            height,
            vectors,
        })
    }

    /// Lattice with every vector set to zero.
    ///
    /// Every sample taken at an integer point of such a lattice is exactly 0.5.
    pub fn zeros(width: usize, height: usize) -> Result<Self, NoiseError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            vectors: vec![DVec2::ZERO; len],
        })
    }

    /// Builds a lattice from column-major vectors.
    ///
    /// Returns `NoiseError::DimensionMismatch` if `vectors.len()` is not
    /// `width * height`.
    pub fn from_vectors(
        width: usize,
        height: usize,
        vectors: Vec<DVec2>,
    ) -> Result<Self, NoiseError> {
        let expected = cell_count(width, height)?;
        if vectors.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                expected,
                got: vectors.len(),
            });
        }
        Ok(Self {
            width,
            height,
            vectors,
        })
    }

    /// Builds a lattice from columns, `columns[x][y]`.
    ///
    /// All columns must have the same, non-zero length.
    pub fn from_columns(columns: Vec<Vec<DVec2>>) -> Result<Self, NoiseError> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        let expected = cell_count(width, height)?;
        if let Some(bad) = columns.iter().find(|c| c.len() != height) {
            return Err(NoiseError::DimensionMismatch {
                expected: height,
                got: bad.len(),
            });
        }
        let vectors: Vec<DVec2> = columns.into_iter().flatten().collect();
        debug_assert_eq!(vectors.len(), expected);
        Ok(Self {
            width,
            height,
            vectors,
        })
    }

    /// Lattice width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Lattice height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Column-major view of every vector.
    pub fn vectors(&self) -> &[DVec2] {
        &self.vectors
    }

    /// Vector at `(x, y)`. Both must be in range.
    pub fn get(&self, x: usize, y: usize) -> DVec2 {
        self.vectors[x * self.height + y]
    }

    /// Number of vectors whose length is not 1 within tolerance.
    pub fn non_unit_count(&self) -> usize {
        self.vectors
            .iter()
            .filter(|v| (v.length() - 1.0).abs() > UNIT_TOLERANCE)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;

    #[test]
    fn random_fills_every_cell_with_unit_vectors() {
        let mut rng = Xorshift64::new(42);
        let lattice = Lattice::random(5, 10, &mut rng).unwrap();
        assert_eq!(lattice.width(), 5);
        assert_eq!(lattice.height(), 10);
        assert_eq!(lattice.vectors().len(), 50);
        assert_eq!(lattice.non_unit_count(), 0);
    }

    #[test]
    fn random_consumes_two_draws_per_cell() {
        let mut draws = 0usize;
        let mut rng = || {
            draws += 1;
            0.25
        };
        Lattice::random(5, 10, &mut rng).unwrap();
        assert_eq!(draws, 2 * 5 * 10);
    }

    #[test]
    fn random_populates_column_by_column() {
        // Alternate between two directions; column-major order means
        // (0, 0) gets the first and (0, 1) the second.
        let script = [0.9, 0.5, 0.5, 0.9];
        let mut i = 0;
        let mut rng = || {
            let v = script[i % script.len()];
            i += 1;
            v
        };
        let lattice = Lattice::random(2, 2, &mut rng).unwrap();
        assert_eq!(lattice.get(0, 0), DVec2::X);
        assert_eq!(lattice.get(0, 1), DVec2::Y);
        assert_eq!(lattice.get(1, 0), DVec2::X);
        assert_eq!(lattice.get(1, 1), DVec2::Y);
    }

    #[test]
    fn random_rejects_zero_dimensions() {
        let mut rng = Xorshift64::new(1);
        assert!(matches!(
            Lattice::random(0, 4, &mut rng),
            Err(NoiseError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            Lattice::random(4, 0, &mut rng),
            Err(NoiseError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn zeros_holds_only_zero_vectors() {
        let lattice = Lattice::zeros(3, 4).unwrap();
        assert!(lattice.vectors().iter().all(|v| *v == DVec2::ZERO));
        assert_eq!(lattice.non_unit_count(), 12);
    }

    #[test]
    fn from_vectors_rejects_wrong_length() {
        let result = Lattice::from_vectors(2, 2, vec![DVec2::X; 3]);
        assert!(matches!(
            result,
            Err(NoiseError::DimensionMismatch {
                expected: 4,
                got: 3
            })
        ));
    }

    #[test]
    fn from_vectors_is_column_major() {
        let vectors = vec![DVec2::X, DVec2::Y, DVec2::NEG_X, DVec2::NEG_Y];
        let lattice = Lattice::from_vectors(2, 2, vectors).unwrap();
        assert_eq!(lattice.get(0, 1), DVec2::Y);
        assert_eq!(lattice.get(1, 0), DVec2::NEG_X);
    }

    #[test]
    fn from_columns_indexes_as_grid_x_y() {
        let columns = vec![
            vec![DVec2::X, DVec2::Y, DVec2::NEG_X],
            vec![DVec2::NEG_Y, DVec2::ONE, DVec2::ZERO],
        ];
        let lattice = Lattice::from_columns(columns).unwrap();
        assert_eq!(lattice.width(), 2);
        assert_eq!(lattice.height(), 3);
        assert_eq!(lattice.get(0, 2), DVec2::NEG_X);
        assert_eq!(lattice.get(1, 0), DVec2::NEG_Y);
    }

    #[test]
    fn from_columns_rejects_ragged_input() {
        let columns = vec![vec![DVec2::X; 3], vec![DVec2::X; 2]];
        assert!(matches!(
            Lattice::from_columns(columns),
            Err(NoiseError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn from_columns_rejects_empty_input() {
        assert!(Lattice::from_columns(Vec::new()).is_err());
        assert!(Lattice::from_columns(vec![Vec::new()]).is_err());
    }
}
