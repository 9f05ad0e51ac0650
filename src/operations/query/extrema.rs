use crate::geometry::HermiteSpline;
use crate::math::hermite::{hermite, quadratic_roots};
use crate::math::EXTREMA_EPSILON;

/// Closed range of curve values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl ValueRange {
    /// Returns whether `y` lies inside the range, widened by `tolerance`.
    #[must_use]
    pub fn contains(&self, y: f64, tolerance: f64) -> bool {
        y >= self.min - tolerance && y <= self.max + tolerance
    }

    fn include(&mut self, y: f64) {
        self.min = self.min.min(y);
        self.max = self.max.max(y);
    }
}

/// Computes the minimum and maximum `y` a spline attains over `[0, 1]`.
///
/// # Algorithm
///
/// For every segment the range is seeded with both endpoint values. The
/// interior critical points are the roots of the segment derivative
/// `a·t² + b·t + c`; each root inside `[0, 1]` is evaluated and folded into
/// the range. Segments whose quadratic coefficient is below `epsilon` are
/// treated as having no interior extremum.
#[derive(Debug, Clone, Copy)]
pub struct Extrema {
    epsilon: f64,
}

impl Default for Extrema {
    fn default() -> Self {
        Self {
            epsilon: EXTREMA_EPSILON,
        }
    }
}

impl Extrema {
    /// Creates a new `Extrema` query with the default epsilon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the threshold below which a segment derivative is treated
    /// as linear.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, spline: &HermiteSpline) -> ValueRange {
        let mut range = ValueRange {
            min: f64::MAX,
            max: f64::MIN,
        };

        for segment in spline.segments() {
            let (y0, y1) = (segment.start().y(), segment.end().y());
            range.include(y0);
            range.include(y1);

            let (a, b, c) = segment.derivative_coefficients();
            let Some((r0, r1)) = quadratic_roots(a, b, c, self.epsilon) else {
                continue;
            };
            let (t0, t1) = segment.scaled_tangents();
            for t in [r0, r1] {
                if (0.0..=1.0).contains(&t) {
                    range.include(hermite(y0, y1, t0, t1, t));
                }
            }
        }

        range
    }
}

impl HermiteSpline {
    /// Returns the minimum and maximum value of the curve.
    #[must_use]
    pub fn extrema(&self) -> ValueRange {
        Extrema::new().execute(self)
    }
}
