//! Capacitor plate geometry and fixed-value boundary encoding.
//!
//! The two electrodes are vertical line segments at column offsets
//! `floor(0.2 n)` and `floor(0.8 n)`, held at +1 V and -1 V. Both span the
//! row range between those same two offsets, so plate length is coupled to
//! plate separation. The outer ring of the domain is held at 0 V; together
//! with the plates it forms the set of cells the sweep never updates.

use crate::grid::{Grid, ScalarField};

/// Potential on the positive plate, in volts.
pub const PLATE_POSITIVE: f64 = 1.0;

/// Potential on the negative plate, in volts.
pub const PLATE_NEGATIVE: f64 = -1.0;

/// The two fixed-potential plates of the capacitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plates {
    /// Column of the positive plate (`floor(0.2 n)`).
    pub col_lo: usize,
    /// Column of the negative plate (`floor(0.8 n)`).
    pub col_hi: usize,
}

impl Plates {
    /// Place the plates at 20% and 80% of the grid edge.
    pub fn for_grid(grid: Grid) -> Self {
        let n = grid.edge() as f64;
        Self {
            col_lo: (0.2 * n) as usize,
            col_hi: (0.8 * n) as usize,
        }
    }

    /// Write the plate potentials into `field`.
    pub fn apply(&self, field: &mut ScalarField) {
        for row in self.col_lo..=self.col_hi {
            field[(row, self.col_lo)] = PLATE_POSITIVE;
            field[(row, self.col_hi)] = PLATE_NEGATIVE;
        }
    }

    /// Whether `(row, col)` is a plate cell, excluded from updates.
    #[inline]
    pub fn is_plate(&self, row: usize, col: usize) -> bool {
        (col == self.col_lo || col == self.col_hi) && row >= self.col_lo && row <= self.col_hi
    }
}
