//! Vertex-angle primitive over nalgebra 2D vectors.
//!
//! Purpose
//! - Provide the one angle operation the construction needs: the interior
//!   angle at a shared vertex between two rays.
//!
//! Why not `Vector2::angle`
//! - nalgebra clamps the cosine into [-1, 1] before `acos`, which silently
//!   repairs degenerate input. This crate's contract is the opposite: a
//!   zero-length arm or a cosine rounded out of domain must surface as NaN
//!   so callers can observe the degradation.

use nalgebra::Vector2;

/// Angle at vertex `b` between the rays toward `a` and toward `c`, radians.
///
/// Computed as `acos(dot / (|ba| |bc|))` with no clamping and no zero-length
/// guard. Well-formed input yields a value in `[0, pi]`; a degenerate arm or
/// a cosine rounded outside `[-1, 1]` yields NaN.
#[inline]
pub fn vertex_angle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ba = a - b;
    let bc = c - b;
    (ba.dot(&bc) / (ba.norm() * bc.norm())).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn right_angle_at_origin() {
        let theta = vertex_angle(vector![1.0, 0.0], vector![0.0, 0.0], vector![0.0, 3.0]);
        assert!((theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn collinear_rays() {
        // Exact in f64: the cosine lands on 1 and -1 without rounding.
        let zero = vertex_angle(vector![2.0, 0.0], vector![0.0, 0.0], vector![5.0, 0.0]);
        assert!(zero.abs() < 1e-12);
        let pi = vertex_angle(vector![-1.0, 0.0], vector![0.0, 0.0], vector![4.0, 0.0]);
        assert!((pi - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn symmetric_in_outer_arguments() {
        // Dot and the norm product are both symmetric under the swap, so the
        // two results are bit-identical, not merely close.
        let a = vector![0.3, 1.7];
        let b = vector![-0.2, 0.4];
        let c = vector![2.0, -0.9];
        assert_eq!(
            vertex_angle(a, b, c).to_bits(),
            vertex_angle(c, b, a).to_bits()
        );
    }

    #[test]
    fn degenerate_arm_is_nan() {
        let b = vector![1.0, 1.0];
        assert!(vertex_angle(b, b, vector![2.0, 0.0]).is_nan());
    }

    #[test]
    fn vector_ops_ground_truth() {
        // The nalgebra operations this module leans on. Unlike the angle
        // tests above, nothing here pins the scalar, so spell it out.
        let v = vector![3.0f64, -4.0];
        let w = vector![1.5f64, 2.0];
        assert!(((v - v).norm()).abs() < 1e-12);
        assert!((v.dot(&w) - w.dot(&v)).abs() < 1e-12);
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }
}
