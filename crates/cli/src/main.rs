//! Four-line report for the adventitious-angle solve.
//!
//! Stdout carries exactly the report; diagnostics go to stderr so the
//! output contract survives piping. The binary takes no arguments and
//! always exits 0.

use anyhow::Result;
use tracing_subscriber::fmt::SubscriberBuilder;

use langley::{alpha, solve_with_defaults};

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let report = solve_with_defaults();
    tracing::info!(
        iterations = report.iterations,
        converged = report.converged,
        "constraint solve finished"
    );

    println!("Total iterations = {}", report.iterations);
    println!("Slope of Line Segment BK = {:.20}", report.slope);
    println!("Angle BKL Error = {:.20}", report.error);
    println!("Alpha = {:.20}", alpha(report.slope));
    Ok(())
}
