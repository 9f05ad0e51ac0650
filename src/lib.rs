//! Segmented cubic Hermite splines over the normalized domain `[0, 1]`.
//!
//! A [`HermiteSpline`] describes a scalar value that varies along `x`, such
//! as an animation or particle property over time. Splines are immutable
//! values: editing operations return new splines and leave their input
//! untouched.
//!
//! ```
//! use hermite_spline::HermiteSpline;
//!
//! let spline = HermiteSpline::new();
//! assert_eq!(spline.sample(0.5)?, 0.5);
//!
//! let edited = spline.insert_point(0.25, 0.0)?.move_point(1, 0.3, 0.8)?;
//! assert_eq!(spline.point_count(), 2);
//! assert_eq!(edited.point_count(), 3);
//! # Ok::<(), hermite_spline::SplineError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, SplineError};
pub use geometry::{Curve, CurveDomain, HermiteSegment, HermiteSpline, SplinePoint};
pub use operations::query::ValueRange;
