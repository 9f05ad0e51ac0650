pub mod hermite;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum distance along `x` between two adjacent control points.
pub const MIN_POINT_X_DISTANCE: f64 = 0.01;

/// Smallest tangent run a control point may carry.
///
/// The slope of a tangent is `ty / tx`, so `tx` never reaches zero.
pub const MIN_TANGENT_X: f64 = 1e-6;

/// Below this magnitude the quadratic coefficient of a segment derivative
/// is treated as zero and the segment has no interior critical point.
pub const EXTREMA_EPSILON: f64 = 1e-4;
