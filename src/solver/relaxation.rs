//! Sweep-and-converge relaxation loop.

use crate::boundary::Plates;
use crate::error::{RelaxError, Result};
use crate::grid::{Grid, ScalarField};

use super::{DEFAULT_OMEGA, DEFAULT_SIZE, DEFAULT_TOLERANCE};

/// Configuration for the relaxation solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Grid edge length N; the field has (N+1) x (N+1) points.
    pub size: usize,
    /// Convergence tolerance for the per-sweep delta.
    pub tolerance: f64,
    /// Relaxation factor; 0 is plain Gauss-Seidel.
    pub omega: f64,
    /// Optional cap on the number of sweeps. `None` lets the loop run until
    /// convergence, which for a divergent omega means forever.
    pub max_iterations: Option<usize>,
    /// Number of row bands for the partitioned sweep; `None` sweeps serially.
    #[cfg(feature = "parallel")]
    pub row_bands: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_TOLERANCE, DEFAULT_OMEGA)
    }
}

impl SolverConfig {
    /// Create a configuration with the given grid size, tolerance, and
    /// relaxation factor.
    pub fn new(size: usize, tolerance: f64, omega: f64) -> Self {
        Self {
            size,
            tolerance,
            omega,
            max_iterations: None,
            #[cfg(feature = "parallel")]
            row_bands: None,
        }
    }

    /// Abort with [`RelaxError::ConvergenceFailure`] instead of sweeping
    /// forever if convergence takes more than `max_iterations` sweeps.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Partition each sweep into `bands` row bands executed in parallel.
    #[cfg(feature = "parallel")]
    pub fn with_row_bands(mut self, bands: usize) -> Self {
        self.row_bands = Some(bands);
        self
    }

    /// Check the configuration before any field is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(RelaxError::invalid_config(format!(
                "grid edge length must be at least 2, got {}",
                self.size
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(RelaxError::invalid_config(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if !self.omega.is_finite() {
            return Err(RelaxError::invalid_config(format!(
                "relaxation factor must be finite, got {}",
                self.omega
            )));
        }
        #[cfg(feature = "parallel")]
        if self.row_bands == Some(0) {
            return Err(RelaxError::invalid_config(
                "row band count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Converged potential field and the sweeps it took to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    /// The converged potential field.
    pub field: ScalarField,
    /// Number of sweeps executed.
    pub iterations: usize,
    /// Largest per-cell change recorded in the final sweep.
    pub delta: f64,
}

/// Iterative relaxation solver for the capacitor potential.
///
/// Each call to [`solve`](Self::solve) allocates a fresh field, applies the
/// plate potentials, and drives the sweep loop to convergence. The result is
/// returned by value; the solver itself carries no per-solve state, so
/// repeated solves with the same configuration give identical results.
#[derive(Debug, Clone)]
pub struct RelaxationSolver {
    config: SolverConfig,
    grid: Grid,
    plates: Plates,
}

impl RelaxationSolver {
    /// Create a solver, rejecting degenerate configurations up front.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.size);
        let plates = Plates::for_grid(grid);
        Ok(Self {
            config,
            grid,
            plates,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The plate geometry derived from the grid size.
    pub fn plates(&self) -> Plates {
        self.plates
    }

    /// Run the sweep loop until the per-sweep delta drops to the tolerance.
    pub fn solve(&self) -> Result<SolverResult> {
        let mut field = ScalarField::zeros(self.grid);
        self.plates.apply(&mut field);

        let mut previous = field.clone();
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while delta > self.config.tolerance {
            if let Some(cap) = self.config.max_iterations {
                if iterations >= cap {
                    return Err(RelaxError::convergence_failure(iterations, delta));
                }
            }
            iterations += 1;
            self.sweep_once(&mut field, &previous);
            delta = field.max_abs_diff(&previous);
            previous.copy_from(&field);
        }

        Ok(SolverResult {
            field,
            iterations,
            delta,
        })
    }

    fn sweep_once(&self, field: &mut ScalarField, previous: &ScalarField) {
        #[cfg(feature = "parallel")]
        if let Some(bands) = self.config.row_bands {
            super::parallel::sweep_row_bands(
                field,
                previous,
                &self.plates,
                self.config.omega,
                bands,
            );
            return;
        }
        #[cfg(not(feature = "parallel"))]
        let _ = previous;
        sweep(field, &self.plates, self.config.omega);
    }
}

/// One in-place Gauss-Seidel sweep over the interior in row-major order.
///
/// The traversal order is load-bearing: cells visited earlier in the sweep
/// contribute their updated values to cells visited later.
fn sweep(field: &mut ScalarField, plates: &Plates, omega: f64) {
    let n = field.grid().edge();
    for i in 1..n {
        for j in 1..n {
            if plates.is_plate(i, j) {
                continue;
            }
            let stencil =
                field[(i + 1, j)] + field[(i - 1, j)] + field[(i, j + 1)] + field[(i, j - 1)];
            field[(i, j)] = (1.0 + omega) * 0.25 * stencil - omega * field[(i, j)];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{PLATE_NEGATIVE, PLATE_POSITIVE};
    use approx::assert_abs_diff_eq;

    fn solve(size: usize, tolerance: f64, omega: f64) -> SolverResult {
        RelaxationSolver::new(SolverConfig::new(size, tolerance, omega))
            .unwrap()
            .solve()
            .unwrap()
    }

    #[test]
    fn rejects_degenerate_grid() {
        let err = RelaxationSolver::new(SolverConfig::new(1, 1e-4, 0.0)).unwrap_err();
        assert!(matches!(err, RelaxError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_nonpositive_tolerance() {
        assert!(RelaxationSolver::new(SolverConfig::new(10, 0.0, 0.0)).is_err());
        assert!(RelaxationSolver::new(SolverConfig::new(10, -1e-4, 0.0)).is_err());
        assert!(RelaxationSolver::new(SolverConfig::new(10, f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn reference_scenario_n10() {
        let result = solve(10, 1e-4, 0.0);

        assert!(result.iterations > 0);
        assert!(result.delta <= 1e-4);

        // Plates sit at columns 2 and 8, spanning rows 2..=8.
        for row in 2..=8 {
            assert_eq!(result.field[(row, 2)], PLATE_POSITIVE);
            assert_eq!(result.field[(row, 8)], PLATE_NEGATIVE);
        }
    }

    #[test]
    fn boundary_ring_stays_at_zero() {
        for size in [10, 25] {
            let result = solve(size, 1e-4, 0.0);
            for k in 0..=size {
                assert_eq!(result.field[(0, k)], 0.0);
                assert_eq!(result.field[(size, k)], 0.0);
                assert_eq!(result.field[(k, 0)], 0.0);
                assert_eq!(result.field[(k, size)], 0.0);
            }
        }
    }

    #[test]
    fn interior_potential_is_bracketed_by_the_plates() {
        let result = solve(10, 1e-4, 0.0);
        for &v in result.field.as_slice() {
            assert!((PLATE_NEGATIVE..=PLATE_POSITIVE).contains(&v));
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let a = solve(10, 1e-4, 0.5);
        let b = solve(10, 1e-4, 0.5);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.field.as_slice(), b.field.as_slice());
    }

    #[test]
    fn field_is_antisymmetric_about_the_centerline() {
        // The +1/-1 plates are mirror images across the vertical centerline,
        // so the converged potential must satisfy phi(i, j) = -phi(i, n - j)
        // up to the convergence error.
        let n = 20;
        let result = solve(n, 1e-6, 0.0);
        for i in 0..=n {
            for j in 0..=n {
                assert_abs_diff_eq!(
                    result.field[(i, j)],
                    -result.field[(i, n - j)],
                    epsilon = 1e-3
                );
            }
        }
    }

    #[test]
    fn over_relaxation_converges_faster() {
        // On a 100-cell grid every omega in (0, 1) is below the optimal
        // relaxation factor, so iteration counts decrease monotonically.
        // Smaller grids have a lower optimum and omega = 0.9 overshoots it.
        let counts: Vec<usize> = [0.0, 0.3, 0.6, 0.9]
            .iter()
            .map(|&omega| solve(100, 1e-5, omega).iterations)
            .collect();
        for pair in counts.windows(2) {
            assert!(
                pair[0] > pair[1],
                "expected iteration counts to decrease, got {:?}",
                counts
            );
        }
    }

    #[test]
    fn iteration_cap_surfaces_convergence_failure() {
        let solver =
            RelaxationSolver::new(SolverConfig::new(10, 1e-12, 0.0).with_max_iterations(3))
                .unwrap();
        match solver.solve() {
            Err(RelaxError::ConvergenceFailure { iterations, delta }) => {
                assert_eq!(iterations, 3);
                assert!(delta > 1e-12);
            }
            other => panic!("expected ConvergenceFailure, got {:?}", other),
        }
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.size, 100);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.omega, 0.0);
        assert!(config.max_iterations.is_none());
    }
}
