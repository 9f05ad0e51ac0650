//! Cubic Hermite basis functions.
//!
//! All functions take the endpoint values `y0`, `y1` and the endpoint
//! derivatives `t0`, `t1` expressed in the local parameter `t ∈ [0, 1]`.

/// Evaluates the cubic Hermite polynomial at `t`.
///
/// `H(t) = (2t³−3t²+1)·y0 + (t³−2t²+t)·t0 + (−2t³+3t²)·y1 + (t³−t²)·t1`
#[must_use]
pub fn hermite(y0: f64, y1: f64, t0: f64, t1: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * t3 - 3.0 * t2 + 1.0) * y0
        + (t3 - 2.0 * t2 + t) * t0
        + (-2.0 * t3 + 3.0 * t2) * y1
        + (t3 - t2) * t1
}

/// Evaluates the first derivative of the cubic Hermite polynomial at `t`.
#[must_use]
pub fn hermite_derivative(y0: f64, y1: f64, t0: f64, t1: f64, t: f64) -> f64 {
    let t2 = t * t;
    (6.0 * t2 - 6.0 * t) * y0
        + (3.0 * t2 - 4.0 * t + 1.0) * t0
        + (-6.0 * t2 + 6.0 * t) * y1
        + (3.0 * t2 - 2.0 * t) * t1
}

/// Evaluates the second derivative of the cubic Hermite polynomial at `t`.
#[must_use]
pub fn hermite_second_derivative(y0: f64, y1: f64, t0: f64, t1: f64, t: f64) -> f64 {
    (12.0 * t - 6.0) * y0 + (6.0 * t - 4.0) * t0 + (-12.0 * t + 6.0) * y1 + (6.0 * t - 2.0) * t1
}

/// Returns the power-form coefficients `(a, b, c)` of the derivative,
/// i.e. `H'(t) = a·t² + b·t + c`.
#[must_use]
pub fn derivative_coefficients(y0: f64, y1: f64, t0: f64, t1: f64) -> (f64, f64, f64) {
    let a = 3.0 * (2.0 * y0 - 2.0 * y1 + t0 + t1);
    let b = 2.0 * (-3.0 * y0 + 3.0 * y1 - 2.0 * t0 - t1);
    (a, b, t0)
}

/// Solves `a·t² + b·t + c = 0`, returning both real roots.
///
/// Returns `None` when `|a| <= epsilon` (the equation is treated as linear
/// and has no critical point of interest) or when the discriminant is
/// negative. [`EXTREMA_EPSILON`](super::EXTREMA_EPSILON) is the usual choice for `epsilon`.
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64, epsilon: f64) -> Option<(f64, f64)> {
    if a.abs() <= epsilon {
        return None;
    }
    let q0 = b / (2.0 * a);
    let q1 = q0 * q0 - c / a;
    if q1 < 0.0 {
        return None;
    }
    let root = q1.sqrt();
    Some((-q0 + root, -q0 - root))
}
