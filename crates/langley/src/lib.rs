//! Adventitious-angle constraint solver.
//!
//! An isosceles triangle construction is parameterized by the slope `m` of
//! the line segment BK. Proportional feedback adjusts `m` until the derived
//! angle BKL meets its 50 degree constraint; the apex angle alpha then
//! follows from the converged slope in closed form.
//!
//! Module map
//! - `angle`: the unclamped vertex-angle primitive.
//! - `triangle`: the construction (points K, A, L) and its two derived angles.
//! - `solver`: the feedback loop and its report types.
//!
//! Numeric policy
//! - All arithmetic is plain `f64`. There is no validation and no clamping
//!   anywhere on the evaluation path: degenerate input degrades to NaN and
//!   the solver reports whatever the arithmetic produced.

pub mod angle;
pub mod solver;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers read like the construction notes.
pub use nalgebra::Vector2 as Vec2;
pub use solver::{solve, solve_with_defaults, SolveCfg, SolveReport};
pub use triangle::{alpha, constraint_angle, Construction};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::vertex_angle;
    pub use crate::solver::{solve, solve_with_defaults, SolveCfg, SolveReport};
    pub use crate::triangle::{alpha, constraint_angle, Construction};
    pub use nalgebra::Vector2 as Vec2;
}
