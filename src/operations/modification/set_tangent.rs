use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::HermiteSpline;
use crate::math::MIN_TANGENT_X;

/// Replaces the tangent of a control point, keeping its position.
///
/// `tx` is clamped to at least [`MIN_TANGENT_X`]. The resulting slope
/// `ty / tx` must be finite.
#[derive(Debug, Clone, Copy)]
pub struct SetTangent {
    index: usize,
    tx: f64,
    ty: f64,
}

impl SetTangent {
    /// Creates a new `SetTangent` operation.
    #[must_use]
    pub fn new(index: usize, tx: f64, ty: f64) -> Self {
        Self { index, tx, ty }
    }

    /// Executes the edit, returning the edited spline.
    ///
    /// # Errors
    ///
    /// - `GeometryError::IndexOutOfRange` if `index` is not a point index
    /// - `GeometryError::NonFinite` if `tx` or `ty` is NaN or infinite, or
    ///   the slope `ty / tx` overflows
    pub fn execute(&self, spline: &HermiteSpline) -> Result<HermiteSpline> {
        let point = spline.point(self.index)?;
        if !self.tx.is_finite() {
            return Err(GeometryError::NonFinite { parameter: "tx" }.into());
        }
        if !self.ty.is_finite() {
            return Err(GeometryError::NonFinite { parameter: "ty" }.into());
        }

        let tx = self.tx.max(MIN_TANGENT_X);
        if tx > self.tx {
            debug!(index = self.index, requested = self.tx, clamped = tx, "clamped tangent run");
        }
        if !(self.ty / tx).is_finite() {
            return Err(GeometryError::NonFinite { parameter: "ty / tx" }.into());
        }

        let mut edited = spline.as_slice().to_vec();
        edited[self.index] = point.with_tangent(tx, self.ty);
        Ok(HermiteSpline::from_points_unchecked(edited))
    }
}

impl HermiteSpline {
    /// Returns a copy of the spline with the tangent of point `index`
    /// replaced by `(tx, ty)`.
    ///
    /// See [`SetTangent`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or a component is not finite.
    pub fn set_tangent(&self, index: usize, tx: f64, ty: f64) -> Result<HermiteSpline> {
        SetTangent::new(index, tx, ty).execute(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SplineError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn replaces_tangent_keeps_position() {
        let s = HermiteSpline::new();
        let edited = s.set_tangent(1, 2.0, -1.0).unwrap();
        let p = edited.point(1).unwrap();
        assert_abs_diff_eq!(p.x(), 1.0);
        assert_abs_diff_eq!(p.y(), 1.0);
        assert_abs_diff_eq!(p.tx(), 2.0);
        assert_abs_diff_eq!(p.ty(), -1.0);
        assert_abs_diff_eq!(edited.slope_at(1.0).unwrap(), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn tangent_run_clamped_positive() {
        let s = HermiteSpline::new();
        for tx in [0.0, -3.0] {
            let p = s.set_tangent(0, tx, 1.0).unwrap().point(0).unwrap();
            assert_abs_diff_eq!(p.tx(), MIN_TANGENT_X);
            assert!(p.slope().is_finite());
        }
    }

    #[test]
    fn clamped_tangent_still_evaluates() {
        let s = HermiteSpline::new().set_tangent(0, 0.0, 0.0).unwrap();
        assert!(s.sample(0.5).unwrap().is_finite());
    }

    #[test]
    fn overflowing_slope_fails() {
        let s = HermiteSpline::new();
        for (tx, ty) in [(0.0, 1e308), (1e-300, 1e10), (1e-6, -f64::MAX)] {
            let err = s.set_tangent(0, tx, ty).unwrap_err();
            assert!(matches!(
                err,
                SplineError::Geometry(GeometryError::NonFinite { .. })
            ));
        }
        assert!(s.set_tangent(0, 0.0, 1e300).is_ok());
    }

    #[test]
    fn bad_index_fails() {
        let err = HermiteSpline::new().set_tangent(2, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SplineError::Geometry(GeometryError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn non_finite_components_fail() {
        assert!(HermiteSpline::new().set_tangent(0, f64::NAN, 1.0).is_err());
        assert!(HermiteSpline::new().set_tangent(0, 1.0, f64::NEG_INFINITY).is_err());
    }
}
