use crate::geometry::curve::check_points;
use crate::geometry::SplinePoint;

/// Validates a raw control point list against the spline invariants.
///
/// Useful for data produced outside of the engine (e.g. by an editor or a
/// file) before it is turned into a [`HermiteSpline`](crate::geometry::HermiteSpline).
pub struct IsValid<'a> {
    points: &'a [SplinePoint],
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(points: &'a [SplinePoint]) -> Self {
        Self { points }
    }

    /// Executes the validation, returning `true` if the points form a valid spline.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.violation().is_none()
    }

    /// Describes the first violated invariant, if any.
    #[must_use]
    pub fn violation(&self) -> Option<String> {
        check_points(self.points).err()
    }
}
