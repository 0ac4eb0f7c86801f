//! Plane trigonometry helpers shared by the coordinate transforms.
//!
//! All inverse trigonometric calls go through the clamped variants here so
//! that floating round-off at triangle degeneracies can never produce NaN.

use std::f64::consts::TAU;

/// Third side of a triangle from two sides and the included angle.
///
/// Round-off can push the squared side slightly negative when the triangle
/// degenerates (e.g. the observer's own position); that is clamped to zero.
pub fn law_of_cosines_side(a: f64, b: f64, gamma: f64) -> f64 {
    let c_squared = a * a + b * b - 2.0 * a * b * gamma.cos();
    c_squared.max(0.0).sqrt()
}

/// Angle opposite the third side, from the three sides of a triangle.
///
/// Returns 0 when either adjacent side vanishes (degenerate triangle).
pub fn triangle_angle(adjacent_a: f64, adjacent_b: f64, opposite: f64) -> f64 {
    let denominator = 2.0 * adjacent_a * adjacent_b;
    if denominator == 0.0 {
        return 0.0;
    }
    let cosine = (adjacent_a * adjacent_a + adjacent_b * adjacent_b - opposite * opposite)
        / denominator;
    clamped_acos(cosine)
}

/// `asin` with the argument clamped to [-1, 1].
pub fn clamped_asin(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).asin()
}

/// `acos` with the argument clamped to [-1, 1].
pub fn clamped_acos(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).acos()
}

/// Wrap an angle into [0, 2*pi).
pub fn wrap_two_pi(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
