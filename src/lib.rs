//! # Capacitor Relax
//!
//! An electrostatic potential solver for a parallel-plate capacitor.
//!
//! The potential inside a grounded square domain containing two fixed-value
//! plate electrodes satisfies the Laplace equation. This crate discretizes
//! the domain on a square grid and solves for the potential with in-place
//! Gauss-Seidel successive over-relaxation: each sweep updates every free
//! interior cell from its four neighbors, and the loop stops once the
//! largest per-cell change between sweeps drops to the configured tolerance.
//!
//! ## Architecture
//!
//! - [`grid`] - Grid geometry and the flat row-major scalar field
//! - [`boundary`] - Plate placement and fixed-value boundary encoding
//! - [`solver`] - Configuration, the sweep kernel, and the convergence loop
//! - [`output`] - Plain-text dump of the converged field
//!
//! With the `parallel` feature, sweeps can be partitioned into row bands
//! executed by rayon workers, synchronized once per sweep before the
//! convergence check.
//!
//! ## Usage
//!
//! ```
//! use capacitor_relax::{RelaxationSolver, SolverConfig};
//!
//! let config = SolverConfig::new(10, 1e-4, 0.0);
//! let result = RelaxationSolver::new(config)?.solve()?;
//!
//! assert!(result.iterations > 0);
//! assert!(result.delta <= 1e-4);
//! # Ok::<(), capacitor_relax::RelaxError>(())
//! ```

pub mod boundary;
pub mod error;
pub mod grid;
pub mod output;
pub mod solver;

// Re-export main types for convenience
pub use boundary::Plates;
pub use error::{RelaxError, Result};
pub use grid::{Grid, ScalarField};
pub use solver::{RelaxationSolver, SolverConfig, SolverResult};
