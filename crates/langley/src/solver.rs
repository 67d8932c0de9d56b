//! Proportional-feedback solve for the constraint on angle BKL.
//!
//! Purpose
//! - Drive the slope of BK until the constraint angle meets its target:
//!   start at slope 1, add a tenth of the angle error per step, stop when
//!   the absolute error is within 1e-10 radians or after 1000 updates.
//!
//! Why proportional feedback
//! - The constraint angle is smooth near the root and the error-to-slope
//!   response is well conditioned there, so feeding a fixed fraction of the
//!   error back into the slope walks to the solution without derivative
//!   information.
//!
//! Degradation
//! - NaN never satisfies the threshold, so a NaN trajectory runs the budget
//!   out and the report carries the NaN. Nothing is guarded or recomputed.

use crate::triangle::constraint_angle;

/// Iteration budget for the feedback loop.
pub const MAX_ITERATIONS: u32 = 1000;
/// Starting slope for the line segment BK.
pub const INITIAL_GUESS: f64 = 1.0;
/// Fraction of the angle error fed back into the slope per step.
pub const ERROR_TRANSFER_RATIO: f64 = 0.1;
/// Convergence threshold on the absolute angle error, radians.
pub const ERROR_THRESHOLD: f64 = 1e-10;
/// Constrained value of angle BKL, degrees.
pub const TARGET_DEGREES: f64 = 50.0;

/// Feedback-loop policy.
///
/// `Default` is the fixed production policy; tests shrink the budget to
/// exercise the exhaustion path. The binary never deviates from `Default`.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Starting slope for BK.
    pub initial_slope: f64,
    /// Fraction of the error added to the slope per step.
    pub gain: f64,
    /// Convergence threshold on the absolute error, radians.
    pub tolerance: f64,
    /// Maximum number of slope updates before giving up.
    pub max_iterations: u32,
    /// Target value of the constraint angle, radians.
    pub target: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            initial_slope: INITIAL_GUESS,
            gain: ERROR_TRANSFER_RATIO,
            tolerance: ERROR_THRESHOLD,
            max_iterations: MAX_ITERATIONS,
            target: TARGET_DEGREES.to_radians(),
        }
    }
}

/// Outcome of a feedback solve.
#[derive(Clone, Copy, Debug)]
pub struct SolveReport {
    /// Slope updates applied. A run that converges on its first evaluation
    /// reports zero.
    pub iterations: u32,
    /// Final slope of BK (on exhaustion, the last updated value).
    pub slope: f64,
    /// Error from the last constraint evaluation, radians. On exhaustion
    /// this belongs to the slope before the final update; it is never
    /// recomputed after the loop. NaN if the loop never ran.
    pub error: f64,
    /// Whether the threshold was met within the budget.
    pub converged: bool,
}

/// Run the feedback loop.
///
/// Per iteration: evaluate the constraint angle, form
/// `error = theta - target`, stop if `|error| <= tolerance`, otherwise add
/// `error * gain` to the slope. The converging evaluation applies no update
/// and consumes no budget, so `iterations` counts exactly the updates
/// applied.
pub fn solve(cfg: SolveCfg) -> SolveReport {
    let mut m = cfg.initial_slope;
    let mut remaining = cfg.max_iterations;
    let mut error = f64::NAN;
    let mut converged = false;
    while remaining > 0 {
        let theta = constraint_angle(m);
        error = theta - cfg.target;
        if error.abs() <= cfg.tolerance {
            converged = true;
            break;
        }
        m += error * cfg.gain;
        remaining -= 1;
    }
    SolveReport {
        iterations: cfg.max_iterations - remaining,
        slope: m,
        error,
        converged,
    }
}

/// Convenience: solve with the fixed production policy.
#[inline]
pub fn solve_with_defaults() -> SolveReport {
    solve(SolveCfg::default())
}
