mod segment;
mod spline;

pub use segment::HermiteSegment;
pub use spline::HermiteSpline;

pub(crate) use spline::check_points;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The closed unit interval `[0, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns whether `t` lies inside the closed domain.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Returns `t` unchanged when it lies inside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `t` is outside the
    /// domain or NaN.
    pub fn check(&self, parameter: &'static str, t: f64) -> Result<f64> {
        if self.contains(t) {
            Ok(t)
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter,
                value: t,
                min: self.t_min,
                max: self.t_max,
            }
            .into())
        }
    }
}

/// Trait for parametric curves in the 2D value plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
