//! Square finite-difference grid and the scalar potential field stored on it.
//!
//! A grid of edge length `n` has `(n + 1) x (n + 1)` points. The field is a
//! flat row-major vector; all `(row, col)` access goes through [`Grid::idx`]
//! so the layout stays in one place.

use std::ops::{Index, IndexMut};

/// Square grid of edge length `n`, giving `(n + 1) x (n + 1)` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    n: usize,
}

impl Grid {
    /// Create a grid of edge length `n`.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Edge length `n`.
    pub fn edge(&self) -> usize {
        self.n
    }

    /// Number of points along one side (`n + 1`).
    pub fn points_per_side(&self) -> usize {
        self.n + 1
    }

    /// Total number of grid points.
    pub fn num_points(&self) -> usize {
        (self.n + 1) * (self.n + 1)
    }

    /// Flat index of `(row, col)` in row-major order.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row <= self.n && col <= self.n);
        row * (self.n + 1) + col
    }

    /// Whether `(row, col)` lies on the outer ring of the domain.
    #[inline]
    pub fn is_outer(&self, row: usize, col: usize) -> bool {
        row == 0 || row == self.n || col == 0 || col == self.n
    }
}

/// Scalar field over a [`Grid`], stored as a flat row-major vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    grid: Grid,
    values: Vec<f64>,
}

impl ScalarField {
    /// Create an all-zero field over `grid`.
    pub fn zeros(grid: Grid) -> Self {
        Self {
            values: vec![0.0; grid.num_points()],
            grid,
        }
    }

    /// The grid this field is defined on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Flat row-major view of all values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.grid.points_per_side())
    }

    /// Maximum absolute per-cell difference between two fields.
    ///
    /// This is the convergence delta: the largest change any cell saw
    /// between two consecutive sweeps.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.grid, other.grid);
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Overwrite this field's values with `other`'s.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.grid, other.grid);
        self.values.copy_from_slice(&other.values);
    }
}

impl Index<(usize, usize)> for ScalarField {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.values[self.grid.idx(row, col)]
    }
}

impl IndexMut<(usize, usize)> for ScalarField {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let i = self.grid.idx(row, col);
        &mut self.values[i]
    }
}
