use tracing::trace;

use crate::error::Result;
use crate::geometry::{HermiteSegment, HermiteSpline};

use super::{Polyline, TessellationParams};

/// Tessellates a spline into a polyline, e.g. for drawing it in an editor.
///
/// Every segment is split into equal steps of the local parameter. The
/// number of steps follows from the chord error bound `M·h²/8`, where `M`
/// bounds `|d²y/dt²|` over the segment and `h` is the step size, and is
/// clamped to `[min_segments, max_segments]`.
pub struct TessellateSpline {
    params: TessellationParams,
}

impl TessellateSpline {
    /// Creates a new `TessellateSpline` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning a polyline from `x = 0` to `x = 1`.
    ///
    /// Control points always appear as polyline vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    #[tracing::instrument(skip_all, fields(segments = spline.segment_count()))]
    pub fn execute(&self, spline: &HermiteSpline) -> Result<Polyline> {
        self.params.validate()?;

        let mut points = Vec::with_capacity(spline.segment_count() * self.params.min_segments + 1);
        for (i, segment) in spline.segments().enumerate() {
            let n = self.subdivision_count(&segment);
            trace!(segment = i, subdivisions = n, "tessellating segment");
            if i == 0 {
                points.push(segment.start().position());
            }
            for j in 1..n {
                #[allow(clippy::cast_precision_loss)]
                let t = j as f64 / n as f64;
                points.push(segment.value_at(t));
            }
            points.push(segment.end().position());
        }

        Ok(Polyline { points })
    }

    /// Number of chords needed to keep `segment` within tolerance.
    fn subdivision_count(&self, segment: &HermiteSegment) -> usize {
        let bound = segment.max_second_derivative();
        // From the chord error bound: M·h²/8 <= tolerance  =>  1/h >= sqrt(M / (8·tolerance))
        let needed = (bound / (8.0 * self.params.tolerance)).sqrt().ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = if needed.is_finite() {
            needed as usize
        } else {
            self.params.max_segments
        };
        n.clamp(self.params.min_segments, self.params.max_segments)
    }
}

impl HermiteSpline {
    /// Tessellates the spline with the given parameters.
    ///
    /// See [`TessellateSpline`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn tessellate(&self, params: TessellationParams) -> Result<Polyline> {
        TessellateSpline::new(params).execute(self)
    }
}
