use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, OperationError, Result, SplineError};
use crate::geometry::SplinePoint;
use crate::math::{Point2, Vector2, MIN_POINT_X_DISTANCE, TOLERANCE};

use super::{Curve, CurveDomain, HermiteSegment};

/// A segmented cubic Hermite spline over the normalized domain `[0, 1]`.
///
/// Given N control points, the spline consists of N−1 Hermite segments, one
/// between each pair of consecutive points. Every spline upholds:
///
/// 1. control point `x` values are strictly increasing,
/// 2. the first point sits at `x = 0` and the last at `x = 1`,
/// 3. adjacent points are at least [`MIN_POINT_X_DISTANCE`] apart,
/// 4. every tangent run `tx` is strictly positive.
///
/// A spline is never modified after construction. Editing operations return
/// a new spline; the point storage is reference counted so that cloning a
/// spline (e.g. to keep it on an undo stack) does not copy the points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct HermiteSpline {
    points: Arc<[SplinePoint]>,
}

impl Default for HermiteSpline {
    /// The two-point identity-like shape `(0, 0) → (1, 1)` with 45° tangents.
    fn default() -> Self {
        Self::from_points_unchecked(vec![
            SplinePoint::new(0.0, 0.0, 0.5, 0.5),
            SplinePoint::new(1.0, 1.0, 0.5, 0.5),
        ])
    }
}

impl HermiteSpline {
    /// Creates the default two-point spline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a spline from control points.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::MalformedInput`] if the points violate any
    /// spline invariant.
    pub fn from_points(points: Vec<SplinePoint>) -> Result<Self> {
        check_points(&points).map_err(OperationError::MalformedInput)?;
        Ok(Self::from_points_unchecked(points))
    }

    /// Decodes a spline from consecutive `(x, y, tx, ty)` quadruples.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::MalformedInput`] if the length is not a
    /// multiple of 4, fewer than two points are given, or the points violate
    /// any spline invariant.
    pub fn from_flat(data: &[f64]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(OperationError::MalformedInput(format!(
                "flat data length {} is not a multiple of 4",
                data.len()
            ))
            .into());
        }
        let points = data
            .chunks_exact(4)
            .map(|q| SplinePoint::new(q[0], q[1], q[2], q[3]))
            .collect();
        Self::from_points(points)
    }

    /// Encodes the spline as consecutive `(x, y, tx, ty)` quadruples.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f64> {
        self.points
            .iter()
            .flat_map(|p| [p.x(), p.y(), p.tx(), p.ty()])
            .collect()
    }

    /// Builds a spline from points that already uphold the invariants.
    pub(crate) fn from_points_unchecked(points: Vec<SplinePoint>) -> Self {
        debug_assert!(check_points(&points).is_ok(), "{:?}", check_points(&points));
        Self {
            points: points.into(),
        }
    }

    /// Returns the number of control points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments, `point_count() - 1`.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns a copy of the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index >= point_count()`.
    pub fn point(&self, index: usize) -> Result<SplinePoint> {
        self.points.get(index).copied().ok_or_else(|| {
            GeometryError::IndexOutOfRange {
                what: "point",
                index,
                count: self.points.len(),
            }
            .into()
        })
    }

    /// Iterates over copies of the control points in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = SplinePoint> + '_ {
        self.points.iter().copied()
    }

    pub(crate) fn as_slice(&self) -> &[SplinePoint] {
        &self.points
    }

    /// Returns the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index >= segment_count()`.
    pub fn segment(&self, index: usize) -> Result<HermiteSegment> {
        if index >= self.segment_count() {
            return Err(GeometryError::IndexOutOfRange {
                what: "segment",
                index,
                count: self.segment_count(),
            }
            .into());
        }
        Ok(HermiteSegment::new(
            self.points[index],
            self.points[index + 1],
        ))
    }

    /// Iterates over all segments in order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = HermiteSegment> + '_ {
        self.points
            .windows(2)
            .map(|w| HermiteSegment::new(w[0], w[1]))
    }

    /// Returns the index of the segment containing `x`.
    ///
    /// Segments are half-open, `[p_s.x, p_{s+1}.x)`, except the last one
    /// which also contains `x = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `x` is outside `[0, 1]`.
    pub fn segment_containing(&self, x: f64) -> Result<usize> {
        let x = CurveDomain::unit().check("x", x)?;
        let after = self.points.partition_point(|p| p.x() <= x);
        Ok(after.saturating_sub(1).min(self.segment_count() - 1))
    }

    /// Locates `x`, returning the segment and its local parameter.
    fn locate(&self, x: f64) -> Result<(HermiteSegment, f64)> {
        let segment = self.segment(self.segment_containing(x)?)?;
        Ok((segment, segment.local_t(x)))
    }

    /// Position on `segment` at local parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment index is out of range or `t` is
    /// outside `[0, 1]`.
    pub fn value_at(&self, segment: usize, t: f64) -> Result<Point2> {
        self.segment(segment)?.evaluate(t)
    }

    /// Unit tangent direction on `segment` at local parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment index is out of range or `t` is
    /// outside `[0, 1]`.
    pub fn tangent_direction_at(&self, segment: usize, t: f64) -> Result<Vector2> {
        self.segment(segment)?.tangent(t)
    }

    /// Curve value `y` at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `x` is outside `[0, 1]`.
    pub fn sample(&self, x: f64) -> Result<f64> {
        let (segment, t) = self.locate(x)?;
        Ok(segment.value_at(t).y)
    }

    /// Curve slope `dy/dx` at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `x` is outside `[0, 1]`.
    pub fn slope_at(&self, x: f64) -> Result<f64> {
        let (segment, t) = self.locate(x)?;
        Ok(segment.derivative_at(t))
    }
}

impl Curve for HermiteSpline {
    fn evaluate(&self, x: f64) -> Result<Point2> {
        Ok(Point2::new(x, self.sample(x)?))
    }

    fn tangent(&self, x: f64) -> Result<Vector2> {
        let (segment, t) = self.locate(x)?;
        Ok(segment.tangent_direction(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<f64>> for HermiteSpline {
    type Error = SplineError;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Self::from_flat(&data)
    }
}

impl From<HermiteSpline> for Vec<f64> {
    fn from(spline: HermiteSpline) -> Self {
        spline.to_flat()
    }
}

/// Checks the spline invariants on a raw point list, describing the first
/// violation found.
#[allow(clippy::float_cmp)]
pub(crate) fn check_points(points: &[SplinePoint]) -> std::result::Result<(), String> {
    if points.len() < 2 {
        return Err(format!(
            "a spline needs at least 2 points, got {}",
            points.len()
        ));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(format!("point {i} has a non-finite component"));
    }
    if let Some(i) = points.iter().position(|p| p.tx() <= 0.0) {
        return Err(format!("point {i} has a non-positive tangent run"));
    }
    if let Some(i) = points.iter().position(|p| !p.slope().is_finite()) {
        return Err(format!("point {i} has a non-finite tangent slope"));
    }
    let first = points[0].x();
    let last = points[points.len() - 1].x();
    if first != 0.0 {
        return Err(format!("first point must sit at x = 0, got {first}"));
    }
    if last != 1.0 {
        return Err(format!("last point must sit at x = 1, got {last}"));
    }
    for (i, w) in points.windows(2).enumerate() {
        let gap = w[1].x() - w[0].x();
        if gap < MIN_POINT_X_DISTANCE - TOLERANCE {
            return Err(format!(
                "points {i} and {} are {gap} apart, minimum is {MIN_POINT_X_DISTANCE}",
                i + 1
            ));
        }
    }
    Ok(())
}
