use crate::error::Result;
use crate::geometry::SplinePoint;
use crate::math::hermite::{
    derivative_coefficients, hermite, hermite_derivative, hermite_second_derivative,
};
use crate::math::{Point2, Vector2};

use super::{Curve, CurveDomain};

/// One cubic piece of a [`HermiteSpline`](super::HermiteSpline), between two
/// consecutive control points.
///
/// The segment is parametrized locally by `t ∈ [0, 1]`: `x` moves linearly
/// from the start point to the end point while `y` follows the Hermite
/// cubic. Each endpoint's tangent slope is scaled by the segment width
/// before entering the Hermite basis, which converts `dy/dx` into `dy/dt`.
/// Two segments sharing a control point therefore agree on `dy/dx` there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    start: SplinePoint,
    end: SplinePoint,
}

impl HermiteSegment {
    pub(crate) fn new(start: SplinePoint, end: SplinePoint) -> Self {
        Self { start, end }
    }

    /// Returns the left control point.
    #[must_use]
    pub fn start(&self) -> SplinePoint {
        self.start
    }

    /// Returns the right control point.
    #[must_use]
    pub fn end(&self) -> SplinePoint {
        self.end
    }

    /// Width of the segment along `x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end.x() - self.start.x()
    }

    /// Endpoint tangents scaled into the local parametrization.
    #[must_use]
    pub fn scaled_tangents(&self) -> (f64, f64) {
        let dx = self.width();
        (dx * self.start.slope(), dx * self.end.slope())
    }

    /// Local parameter of the global coordinate `x`.
    #[must_use]
    pub fn local_t(&self, x: f64) -> f64 {
        (x - self.start.x()) / self.width()
    }

    /// Position at local parameter `t`. No range check is performed.
    #[must_use]
    pub fn value_at(&self, t: f64) -> Point2 {
        let (t0, t1) = self.scaled_tangents();
        let x = self.start.x() * (1.0 - t) + self.end.x() * t;
        let y = hermite(self.start.y(), self.end.y(), t0, t1, t);
        Point2::new(x, y)
    }

    /// Slope `dy/dx` at local parameter `t`.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> f64 {
        let (t0, t1) = self.scaled_tangents();
        hermite_derivative(self.start.y(), self.end.y(), t0, t1, t) / self.width()
    }

    /// Unit direction `(1, dy/dx) / ‖(1, dy/dx)‖` at local parameter `t`.
    #[must_use]
    pub fn tangent_direction(&self, t: f64) -> Vector2 {
        Vector2::new(1.0, self.derivative_at(t)).normalize()
    }

    /// Power-form coefficients `(a, b, c)` of `dy/dt = a·t² + b·t + c`.
    #[must_use]
    pub fn derivative_coefficients(&self) -> (f64, f64, f64) {
        let (t0, t1) = self.scaled_tangents();
        derivative_coefficients(self.start.y(), self.end.y(), t0, t1)
    }

    /// Upper bound of `|d²y/dt²|` over the segment.
    ///
    /// The second derivative of a cubic is linear, so the bound is attained
    /// at one of the endpoints.
    #[must_use]
    pub fn max_second_derivative(&self) -> f64 {
        let (t0, t1) = self.scaled_tangents();
        let (y0, y1) = (self.start.y(), self.end.y());
        hermite_second_derivative(y0, y1, t0, t1, 0.0)
            .abs()
            .max(hermite_second_derivative(y0, y1, t0, t1, 1.0).abs())
    }
}

impl Curve for HermiteSegment {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let t = self.domain().check("t", t)?;
        Ok(self.value_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let t = self.domain().check("t", t)?;
        Ok(self.tangent_direction(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}
