//! Convergence timing probe for the default feedback solve.
//!
//! Purpose
//! - Provide a reproducible data point for how fast the loop closes on the
//!   50 degree constraint, and how the iteration count moves with the
//!   starting slope.
//!
//! Run with `cargo run -p langley --example convergence_probe --release`.

use std::time::Instant;

use langley::{alpha, solve, solve_with_defaults, SolveCfg};

fn main() {
    let start = Instant::now();
    let report = solve_with_defaults();
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

    println!(
        "default: iterations={} slope={:.17} error={:.3e} alpha={:.12}",
        report.iterations,
        report.slope,
        report.error,
        alpha(report.slope)
    );
    println!("solve_time_us={elapsed_us:.1}");

    // Iteration counts across the basin below the sqrt(3) degeneracy.
    for &m0 in &[0.25f64, 0.5, 0.75, 1.0, 1.25, 1.5] {
        let r = solve(SolveCfg {
            initial_slope: m0,
            ..SolveCfg::default()
        });
        println!(
            "start={m0:.2} iterations={} converged={}",
            r.iterations, r.converged
        );
    }
}
