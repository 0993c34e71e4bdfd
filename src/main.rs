//! relax - parallel-plate capacitor potential solver.
//!
//! Computes the converged potential field and writes it as plain text, one
//! grid row per line.
//!
//! # Usage
//!
//! ```bash
//! relax --size 100 --tolerance 1e-5 --omega 0.9 --output potential.txt
//! ```

use std::path::PathBuf;
use std::time::Instant;

use capacitor_relax::{
    error::Result,
    output,
    solver::{RelaxationSolver, SolverConfig, DEFAULT_OMEGA, DEFAULT_SIZE, DEFAULT_TOLERANCE},
};
use clap::Parser;

/// Parallel-plate capacitor potential solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid edge length N; the field has (N+1) x (N+1) points
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Convergence tolerance for the per-sweep delta
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Relaxation factor (0 = plain Gauss-Seidel)
    #[arg(short = 'w', long, default_value_t = DEFAULT_OMEGA)]
    omega: f64,

    /// Abort with an error after this many sweeps instead of looping forever
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Output file for the converged field
    #[arg(short, long, default_value = "potential.txt")]
    output: PathBuf,

    /// Number of row bands to sweep in parallel
    #[cfg(feature = "parallel")]
    #[arg(long)]
    bands: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SolverConfig::new(args.size, args.tolerance, args.omega);
    if let Some(cap) = args.max_iterations {
        config = config.with_max_iterations(cap);
    }
    #[cfg(feature = "parallel")]
    if let Some(bands) = args.bands {
        config = config.with_row_bands(bands);
    }

    let solver = RelaxationSolver::new(config)?;

    let start = Instant::now();
    let result = solver.solve()?;
    let elapsed = start.elapsed();

    output::write_field_to_path(&args.output, &result.field)?;

    println!("iterations: {}", result.iterations);
    println!("elapsed: {:.6} s", elapsed.as_secs_f64());

    Ok(())
}
