use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::HermiteSpline;
use crate::math::MIN_POINT_X_DISTANCE;

/// Moves a control point to a new position.
///
/// The first point is pinned to `x = 0` and the last to `x = 1`. Interior
/// points are clamped so they stay at least [`MIN_POINT_X_DISTANCE`] away
/// from both neighbours. When the neighbours are too close together to
/// leave any room, `x` is kept. `y` is unconstrained and the tangent is kept.
#[derive(Debug, Clone, Copy)]
pub struct MovePoint {
    index: usize,
    x: f64,
    y: f64,
}

impl MovePoint {
    /// Creates a new `MovePoint` operation.
    #[must_use]
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }

    /// Executes the move, returning the edited spline.
    ///
    /// # Errors
    ///
    /// - `GeometryError::IndexOutOfRange` if `index` is not a point index
    /// - `GeometryError::NonFinite` if `x` or `y` is NaN or infinite
    pub fn execute(&self, spline: &HermiteSpline) -> Result<HermiteSpline> {
        let point = spline.point(self.index)?;
        if !self.x.is_finite() {
            return Err(GeometryError::NonFinite { parameter: "x" }.into());
        }
        if !self.y.is_finite() {
            return Err(GeometryError::NonFinite { parameter: "y" }.into());
        }

        let points = spline.as_slice();
        let last = points.len() - 1;
        let x = if self.index == 0 {
            0.0
        } else if self.index == last {
            1.0
        } else {
            let lo = points[self.index - 1].x() + MIN_POINT_X_DISTANCE;
            let hi = points[self.index + 1].x() - MIN_POINT_X_DISTANCE;
            if lo > hi {
                point.x()
            } else {
                self.x.max(lo).min(hi)
            }
        };

        if (x - self.x).abs() > f64::EPSILON {
            debug!(index = self.index, requested = self.x, clamped = x, "clamped point x");
        }

        let mut edited = points.to_vec();
        edited[self.index] = point.with_position(x, self.y);
        Ok(HermiteSpline::from_points_unchecked(edited))
    }
}

impl HermiteSpline {
    /// Returns a copy of the spline with point `index` moved to `(x, y)`.
    ///
    /// See [`MovePoint`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or a coordinate is not finite.
    pub fn move_point(&self, index: usize, x: f64, y: f64) -> Result<HermiteSpline> {
        MovePoint::new(index, x, y).execute(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SplineError;
    use approx::assert_abs_diff_eq;

    fn three_points() -> HermiteSpline {
        HermiteSpline::from_flat(&[
            0.0, 0.0, 1.0, 0.0, //
            0.5, 1.0, 1.0, 0.0, //
            1.0, 0.0, 1.0, 0.0,
        ])
        .unwrap()
    }

    #[test]
    fn endpoints_are_pinned() {
        let s = three_points();
        let moved = s.move_point(0, 0.3, 2.0).unwrap();
        let p = moved.point(0).unwrap();
        assert_abs_diff_eq!(p.x(), 0.0);
        assert_abs_diff_eq!(p.y(), 2.0);

        let moved = s.move_point(2, 0.3, -2.0).unwrap();
        let p = moved.point(2).unwrap();
        assert_abs_diff_eq!(p.x(), 1.0);
        assert_abs_diff_eq!(p.y(), -2.0);
    }

    #[test]
    fn interior_point_moves_freely_between_neighbours() {
        let moved = three_points().move_point(1, 0.25, 3.0).unwrap();
        let p = moved.point(1).unwrap();
        assert_abs_diff_eq!(p.x(), 0.25);
        assert_abs_diff_eq!(p.y(), 3.0);
    }

    #[test]
    fn interior_point_keeps_minimum_spacing() {
        let s = three_points();
        let left = s.move_point(1, -5.0, 0.0).unwrap();
        assert_abs_diff_eq!(left.point(1).unwrap().x(), MIN_POINT_X_DISTANCE);
        let right = s.move_point(1, 5.0, 0.0).unwrap();
        assert_abs_diff_eq!(right.point(1).unwrap().x(), 1.0 - MIN_POINT_X_DISTANCE);
    }

    #[test]
    fn x_is_kept_when_neighbours_leave_no_room() {
        let g = MIN_POINT_X_DISTANCE - 0.9e-10;
        let s = HermiteSpline::from_flat(&[
            0.0, 0.0, 1.0, 0.0, //
            g, 0.0, 1.0, 0.0, //
            2.0 * g, 0.0, 1.0, 0.0, //
            1.0, 0.0, 1.0, 0.0,
        ])
        .unwrap();
        let moved = s.move_point(1, 0.5, 0.4).unwrap();
        let p = moved.point(1).unwrap();
        assert_abs_diff_eq!(p.x(), g);
        assert_abs_diff_eq!(p.y(), 0.4);
        assert!(HermiteSpline::from_flat(&moved.to_flat()).is_ok());
    }

    #[test]
    fn tangent_is_carried_over() {
        let s = HermiteSpline::from_flat(&[
            0.0, 0.0, 1.0, 0.0, //
            0.5, 1.0, 0.3, -0.7, //
            1.0, 0.0, 1.0, 0.0,
        ])
        .unwrap();
        let p = s.move_point(1, 0.6, 0.0).unwrap().point(1).unwrap();
        assert_abs_diff_eq!(p.tx(), 0.3);
        assert_abs_diff_eq!(p.ty(), -0.7);
    }

    #[test]
    fn original_is_untouched() {
        let s = three_points();
        let before = s.clone();
        let _ = s.move_point(1, 0.7, 9.0).unwrap();
        assert_eq!(s, before);
    }

    #[test]
    fn bad_index_fails() {
        let err = three_points().move_point(3, 0.5, 0.5).unwrap_err();
        assert!(matches!(
            err,
            SplineError::Geometry(GeometryError::IndexOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn non_finite_coordinates_fail() {
        assert!(three_points().move_point(1, f64::NAN, 0.5).is_err());
        assert!(three_points().move_point(1, 0.5, f64::INFINITY).is_err());
    }
}
