mod tessellate_spline;

pub use tessellate_spline::TessellateSpline;

use crate::error::{Result, TessellationError};
use crate::math::Point2;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation in `y` between the curve and its chords.
    pub tolerance: f64,
    /// Minimum number of chords per spline segment.
    pub min_segments: usize,
    /// Maximum number of chords per spline segment.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.001,
            min_segments: 1,
            max_segments: 64,
        }
    }
}

impl TessellationParams {
    /// Checks that the parameters describe a usable subdivision.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] if the tolerance is
    /// not positive and finite, `min_segments` is zero, or
    /// `min_segments > max_segments`.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.min_segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "min_segments must be at least 1".to_owned(),
            )
            .into());
        }
        if self.min_segments > self.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "min_segments {} exceeds max_segments {}",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}
