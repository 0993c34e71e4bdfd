//! Row-band partitioned sweep.
//!
//! The interior rows are split into contiguous bands, one rayon task per
//! band. A worker only writes cells inside its own band; the rows it needs
//! from neighboring bands are read from the previous sweep's snapshot, so the
//! result is deterministic for a fixed band count regardless of scheduling.
//! The convergence delta is computed by the caller only after every band has
//! finished, which is the per-sweep barrier.

use rayon::prelude::*;

use crate::boundary::Plates;
use crate::grid::ScalarField;

pub(super) fn sweep_row_bands(
    field: &mut ScalarField,
    previous: &ScalarField,
    plates: &Plates,
    omega: f64,
    bands: usize,
) {
    let grid = field.grid();
    let n = grid.edge();
    let w = grid.points_per_side();

    // Rows 1..n are the updatable interior; rows 0 and n never change.
    let interior_rows = n - 1;
    let bands = bands.clamp(1, interior_rows);
    let rows_per_band = interior_rows.div_ceil(bands);

    let interior = &mut field.as_mut_slice()[w..n * w];

    interior
        .par_chunks_mut(rows_per_band * w)
        .enumerate()
        .for_each(|(band, chunk)| {
            let first_row = 1 + band * rows_per_band;
            let band_rows = chunk.len() / w;
            for r in 0..band_rows {
                let i = first_row + r;
                for j in 1..n {
                    if plates.is_plate(i, j) {
                        continue;
                    }
                    // Band-edge neighbors belong to another band (or the
                    // outer ring) and are read from the snapshot; in-band
                    // neighbors see this sweep's updates, as in the serial
                    // Gauss-Seidel traversal.
                    let above = if r == 0 {
                        previous[(i - 1, j)]
                    } else {
                        chunk[(r - 1) * w + j]
                    };
                    let below = if r + 1 == band_rows {
                        previous[(i + 1, j)]
                    } else {
                        chunk[(r + 1) * w + j]
                    };
                    let cell = r * w + j;
                    let stencil = below + above + chunk[cell + 1] + chunk[cell - 1];
                    chunk[cell] = (1.0 + omega) * 0.25 * stencil - omega * chunk[cell];
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use crate::boundary::{PLATE_NEGATIVE, PLATE_POSITIVE};
    use crate::solver::{RelaxationSolver, SolverConfig, SolverResult};

    fn solve_banded(size: usize, tolerance: f64, omega: f64, bands: usize) -> SolverResult {
        RelaxationSolver::new(SolverConfig::new(size, tolerance, omega).with_row_bands(bands))
            .unwrap()
            .solve()
            .unwrap()
    }

    #[test]
    fn rejects_zero_bands() {
        let config = SolverConfig::new(10, 1e-4, 0.0).with_row_bands(0);
        assert!(RelaxationSolver::new(config).is_err());
    }

    #[test]
    fn banded_solve_keeps_boundaries_and_converges() {
        let size = 20;
        let result = solve_banded(size, 1e-5, 0.0, 4);

        assert!(result.delta <= 1e-5);
        for k in 0..=size {
            assert_eq!(result.field[(0, k)], 0.0);
            assert_eq!(result.field[(size, k)], 0.0);
            assert_eq!(result.field[(k, 0)], 0.0);
            assert_eq!(result.field[(k, size)], 0.0);
        }
        for row in 4..=16 {
            assert_eq!(result.field[(row, 4)], PLATE_POSITIVE);
            assert_eq!(result.field[(row, 16)], PLATE_NEGATIVE);
        }
    }

    #[test]
    fn banded_solve_is_deterministic() {
        let a = solve_banded(20, 1e-5, 0.5, 3);
        let b = solve_banded(20, 1e-5, 0.5, 3);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.field.as_slice(), b.field.as_slice());
    }

    #[test]
    fn single_band_matches_the_serial_sweep_exactly() {
        // With one band there are no band seams, so every neighbor read sees
        // the same values as the serial traversal.
        let serial = RelaxationSolver::new(SolverConfig::new(15, 1e-5, 0.3))
            .unwrap()
            .solve()
            .unwrap();
        let banded = solve_banded(15, 1e-5, 0.3, 1);
        assert_eq!(serial.iterations, banded.iterations);
        assert_eq!(serial.field.as_slice(), banded.field.as_slice());
    }
}
