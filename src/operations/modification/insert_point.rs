use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{HermiteSpline, SplinePoint};
use crate::math::{MIN_POINT_X_DISTANCE, TOLERANCE};

/// Inserts a control point on the curve at `x`.
///
/// The new point takes its value and tangent from the existing curve at `x`,
/// so the shape of the curve does not change. The requested `y` is not used
/// for the new point; it is kept as part of the operation so callers can
/// pass the raw cursor position of an editing gesture.
#[derive(Debug, Clone, Copy)]
pub struct InsertPoint {
    x: f64,
    y: f64,
}

impl InsertPoint {
    /// Creates a new `InsertPoint` operation.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Executes the insertion, returning the edited spline.
    ///
    /// # Errors
    ///
    /// - `OperationError::NoSegment` if `x` is not strictly inside `(0, 1)`
    /// - `OperationError::SpacingViolation` if `x` is closer than
    ///   [`MIN_POINT_X_DISTANCE`] to an existing point
    pub fn execute(&self, spline: &HermiteSpline) -> Result<HermiteSpline> {
        if !(self.x > 0.0 && self.x < 1.0) {
            debug!(x = self.x, "insert target outside every segment");
            return Err(OperationError::NoSegment { x: self.x }.into());
        }

        let index = spline.segment_containing(self.x)?;
        let segment = spline.segment(index)?;
        let t = segment.local_t(self.x);
        let position = segment.value_at(t);
        let direction = segment.tangent_direction(t);

        let min_gap = MIN_POINT_X_DISTANCE - TOLERANCE;
        if position.x - segment.start().x() < min_gap || segment.end().x() - position.x < min_gap
        {
            debug!(x = self.x, segment = index, "insert target too close to a point");
            return Err(OperationError::SpacingViolation {
                x: self.x,
                min_spacing: MIN_POINT_X_DISTANCE,
            }
            .into());
        }

        debug!(x = self.x, ignored_y = self.y, segment = index, "inserting point");
        let mut edited = spline.as_slice().to_vec();
        edited.insert(
            index + 1,
            SplinePoint::new(position.x, position.y, direction.x, direction.y),
        );
        Ok(HermiteSpline::from_points_unchecked(edited))
    }
}

impl HermiteSpline {
    /// Returns a copy of the spline with a point inserted on the curve at `x`.
    ///
    /// See [`InsertPoint`].
    ///
    /// # Errors
    ///
    /// Returns an error if `x` does not fall strictly inside a segment or is
    /// too close to an existing point.
    pub fn insert_point(&self, x: f64, y: f64) -> Result<HermiteSpline> {
        InsertPoint::new(x, y).execute(self)
    }
}
