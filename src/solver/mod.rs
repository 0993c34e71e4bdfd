//! Gauss-Seidel relaxation solver for the Laplace equation.
//!
//! The potential satisfies ∇²φ = 0 between the plates. Discretized with the
//! 5-point stencil, each free cell is the average of its four neighbors:
//!
//! ```text
//! φ[i,j] = 0.25 * (φ[i+1,j] + φ[i-1,j] + φ[i,j+1] + φ[i,j-1])
//! ```
//!
//! The sweep applies this in place in row-major order, so values updated
//! earlier in the same sweep feed into later cells (Gauss-Seidel rather than
//! Jacobi). With the relaxation factor ω the update is pushed past the plain
//! average:
//!
//! ```text
//! φ[i,j] = (1 + ω) * 0.25 * (neighbors) - ω * φ[i,j]
//! ```
//!
//! ω = 0 is plain Gauss-Seidel; ω in (0, 1) over-relaxes toward faster
//! convergence. The loop stops once the largest per-cell change between two
//! consecutive sweeps drops to the tolerance.

mod relaxation;

#[cfg(feature = "parallel")]
mod parallel;

pub use relaxation::{RelaxationSolver, SolverConfig, SolverResult};

/// Default grid edge length.
pub const DEFAULT_SIZE: usize = 100;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Default relaxation factor (plain Gauss-Seidel).
pub const DEFAULT_OMEGA: f64 = 0.0;
