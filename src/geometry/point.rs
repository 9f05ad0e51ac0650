use serde::{Deserialize, Serialize};

use crate::math::{Point2, Vector2};

/// A control point of a Hermite spline.
///
/// Holds the position `(x, y)` and the tangent `(tx, ty)` whose slope is
/// `ty / tx`. Points are plain values: every copy handed out by a spline is
/// independent of the spline's storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplinePoint {
    x: f64,
    y: f64,
    tx: f64,
    ty: f64,
}

impl SplinePoint {
    /// Creates a new control point.
    #[must_use]
    pub fn new(x: f64, y: f64, tx: f64, ty: f64) -> Self {
        Self { x, y, tx, ty }
    }

    /// Position along the normalized domain.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Curve value at [`x`](Self::x).
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Tangent run.
    #[must_use]
    pub fn tx(&self) -> f64 {
        self.tx
    }

    /// Tangent rise.
    #[must_use]
    pub fn ty(&self) -> f64 {
        self.ty
    }

    /// Tangent slope `ty / tx`, independent of any segment width.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.ty / self.tx
    }

    /// Position `(x, y)` as a point.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Tangent `(tx, ty)` as a vector.
    #[must_use]
    pub fn tangent(&self) -> Vector2 {
        Vector2::new(self.tx, self.ty)
    }

    /// Returns a copy with a different position and the same tangent.
    #[must_use]
    pub(crate) fn with_position(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Returns a copy with a different tangent and the same position.
    #[must_use]
    pub(crate) fn with_tangent(self, tx: f64, ty: f64) -> Self {
        Self { tx, ty, ..self }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.tx.is_finite() && self.ty.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_is_rise_over_run() {
        let p = SplinePoint::new(0.5, 1.0, 0.5, 0.25);
        assert!((p.slope() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn copies_are_independent() {
        let p = SplinePoint::new(0.0, 0.0, 0.5, 0.5);
        let moved = p.with_position(0.0, 3.0);
        assert!((p.y()).abs() < 1e-12);
        assert!((moved.y() - 3.0).abs() < 1e-12);
        assert!((moved.tx() - p.tx()).abs() < 1e-12);
    }

    #[test]
    fn non_finite_fields_are_detected() {
        assert!(SplinePoint::new(0.0, 1.0, 1.0, 0.0).is_finite());
        assert!(!SplinePoint::new(0.0, f64::NAN, 1.0, 0.0).is_finite());
        assert!(!SplinePoint::new(0.0, 1.0, f64::INFINITY, 0.0).is_finite());
    }
}
