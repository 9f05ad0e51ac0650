pub mod curve;
pub mod point;

pub use curve::{Curve, CurveDomain, HermiteSegment, HermiteSpline};
pub use point::SplinePoint;
