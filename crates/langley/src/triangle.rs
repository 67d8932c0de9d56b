//! The isosceles construction and its two derived angles.
//!
//! Purpose
//! - Materialize the construction points for a given slope `m` of the line
//!   segment BK, and expose the quantities the solver and the report need:
//!   the constraint angle BKL and the apex angle alpha.
//!
//! The figure, in graphable equations
//! - K circle: `x^2 + y^2 = 2x` (center B, radius 1; C lies on it too)
//! - BK: `y = m(1 - x)`
//! - CA: `y = ((sqrt(m^2 + 1) + 1)/m) x`
//! - BA: `y = ((sqrt(m^2 + 1) + 1)/m)(1 - x)`
//!
//! Side lengths, in the dash notation of the figure
//! - one dash: `i = |A| - j`, the length |KA|
//! - two dashes: `j = |CK| = sqrt(2 K.x)`
//! - three dashes: `k = |CB| = |BK| = 1`
//!
//! Numeric policy
//! - No validation and no clamping. `m = 0` divides by zero in the CA slope
//!   and degrades to NaN through the construction. At `m = sqrt(3)` the
//!   figure is equilateral: K meets A, L meets B, and the angle at K
//!   collapses; nearby slopes can evaluate to NaN when the cosine rounds
//!   past 1. Both degradations are deliberate pass-throughs.

use nalgebra::Vector2;

use crate::angle::vertex_angle;

/// The derived points of the figure for one slope of BK.
///
/// The base vertices are fixed and exposed as associated functions; the
/// derived points are plain data produced by [`Construction::from_slope`].
#[derive(Clone, Copy, Debug)]
pub struct Construction {
    /// Intersection of BK with the circle on the side toward C. Lies on the
    /// ray CA, one unit from B.
    pub k: Vector2<f64>,
    /// Apex of the isosceles triangle, on the bisector `x = 1/2`, so that
    /// `|CA| = |BA| = |A|`.
    pub a: Vector2<f64>,
    /// The point at distance `i = |KA|` from B along BA.
    pub l: Vector2<f64>,
}

impl Construction {
    /// Base vertex C, the origin.
    #[inline]
    pub fn c() -> Vector2<f64> {
        Vector2::new(0.0, 0.0)
    }

    /// Base vertex B, one unit along the x axis from C.
    #[inline]
    pub fn b() -> Vector2<f64> {
        Vector2::new(1.0, 0.0)
    }

    /// Build the figure for one slope of BK.
    ///
    /// Evaluation order:
    /// 1. K from the line/circle intersection with `x < 1`.
    /// 2. The slope of the ray CA through K, `(sqrt(m^2 + 1) + 1)/m`.
    /// 3. The chord length `j = |CK| = sqrt(2 K.x)`.
    /// 4. A where the ray meets the bisector `x = 1/2`.
    /// 5. The leftover length `i = |A| - j = |KA|`.
    /// 6. L at distance `i` from B along BA (`|BA| = |A|` by symmetry).
    pub fn from_slope(m: f64) -> Self {
        let hyp = (m * m + 1.0).sqrt();
        let k = Vector2::new(1.0 - 1.0 / hyp, m / hyp);
        let slope_ca = (hyp + 1.0) / m;
        let j = (2.0 * k.x).sqrt();
        let a = Vector2::new(0.5, slope_ca * 0.5);
        let mag_a = a.norm();
        let i = mag_a - j;
        let l = Self::b() + (a - Self::b()) * (i / mag_a);
        Self { k, a, l }
    }

    /// Interior angle BKL in radians, the constrained quantity.
    #[inline]
    pub fn constraint_angle(&self) -> f64 {
        vertex_angle(Self::b(), self.k, self.l)
    }
}

/// Constraint angle BKL for a slope of BK, radians.
///
/// Closed form, deterministic, idempotent. Degenerate slopes degrade to NaN
/// rather than erroring.
#[inline]
pub fn constraint_angle(m: f64) -> f64 {
    Construction::from_slope(m).constraint_angle()
}

/// Apex angle alpha in degrees, from the slope of BK.
///
/// Rebuilds only the chord `j = |CK|` from the slope. In the isosceles
/// triangle BCK (`|BC| = |BK| = 1`, base `j`) the base angle satisfies
/// `cos BCK = j/2`, and since K lies on the ray CA this is also the base
/// angle of the outer triangle. The angle sum then gives
/// `alpha = 180 - 2 BCK`.
#[inline]
pub fn alpha(m: f64) -> f64 {
    let j = (2.0 - 2.0 / (m * m + 1.0).sqrt()).sqrt();
    let angle_bck = (j * 0.5).acos().to_degrees();
    180.0 - 2.0 * angle_bck
}
