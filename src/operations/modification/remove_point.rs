use tracing::debug;

use crate::geometry::HermiteSpline;

/// Removes an interior control point.
///
/// The first and last points anchor the domain and are never removed; for
/// those indices (and indices past the end) the spline is returned as is.
#[derive(Debug, Clone, Copy)]
pub struct RemovePoint {
    index: usize,
}

impl RemovePoint {
    /// Creates a new `RemovePoint` operation.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Executes the removal, returning the edited spline.
    #[must_use]
    pub fn execute(&self, spline: &HermiteSpline) -> HermiteSpline {
        if self.index == 0 || self.index >= spline.point_count() - 1 {
            debug!(index = self.index, "point is anchored, nothing removed");
            return spline.clone();
        }

        let mut edited = spline.as_slice().to_vec();
        edited.remove(self.index);
        HermiteSpline::from_points_unchecked(edited)
    }
}

impl HermiteSpline {
    /// Returns a copy of the spline without point `index`.
    ///
    /// See [`RemovePoint`].
    #[must_use]
    pub fn remove_point(&self, index: usize) -> HermiteSpline {
        RemovePoint::new(index).execute(self)
    }
}
