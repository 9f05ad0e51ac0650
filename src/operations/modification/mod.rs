//! Editing operations.
//!
//! Every operation takes a spline by reference and returns a new spline; the
//! input is never modified, so callers may keep earlier values around (for
//! example on an undo stack).

mod insert_point;
mod move_point;
mod remove_point;
mod set_tangent;

pub use insert_point::InsertPoint;
pub use move_point::MovePoint;
pub use remove_point::RemovePoint;
pub use set_tangent::SetTangent;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::geometry::HermiteSpline;
    use crate::math::MIN_POINT_X_DISTANCE;
    use approx::assert_abs_diff_eq;

    /// Applies a fixed sequence of edits, collecting every intermediate spline.
    fn edit_history() -> Vec<HermiteSpline> {
        let mut history = vec![HermiteSpline::new()];
        let mut push = |f: &dyn Fn(&HermiteSpline) -> HermiteSpline| {
            let next = f(history.last().unwrap());
            history.push(next);
        };
        push(&|s: &HermiteSpline| s.insert_point(0.5, 0.0).unwrap());
        push(&|s: &HermiteSpline| s.insert_point(0.25, 0.0).unwrap());
        push(&|s: &HermiteSpline| s.insert_point(0.8, 0.0).unwrap());
        push(&|s: &HermiteSpline| s.move_point(2, 0.9, 2.5).unwrap());
        push(&|s: &HermiteSpline| s.move_point(1, -1.0, -0.5).unwrap());
        push(&|s: &HermiteSpline| s.set_tangent(2, 0.2, -1.5).unwrap());
        push(&|s: &HermiteSpline| s.set_tangent(0, 0.0, 0.001).unwrap());
        push(&|s: &HermiteSpline| s.move_point(0, 0.5, 0.3).unwrap());
        push(&|s: &HermiteSpline| s.move_point(4, 0.5, 0.7).unwrap());
        push(&|s: &HermiteSpline| s.remove_point(3));
        push(&|s: &HermiteSpline| s.insert_point(0.5, 0.0).unwrap());
        history
    }

    #[test]
    fn edits_keep_endpoints_anchored() {
        for s in edit_history() {
            assert_abs_diff_eq!(s.point(0).unwrap().x(), 0.0);
            assert_abs_diff_eq!(s.point(s.point_count() - 1).unwrap().x(), 1.0);
        }
    }

    #[test]
    fn edits_keep_minimum_spacing() {
        for s in edit_history() {
            let xs: Vec<f64> = s.points().map(|p| p.x()).collect();
            for w in xs.windows(2) {
                assert!(w[1] - w[0] >= MIN_POINT_X_DISTANCE - 1e-12, "{xs:?}");
            }
        }
    }

    #[test]
    fn edits_keep_positive_tangent_runs() {
        for s in edit_history() {
            assert!(s.points().all(|p| p.tx() > 0.0));
        }
    }

    #[test]
    fn value_is_continuous_at_internal_points() {
        for s in edit_history() {
            for i in 1..s.segment_count() {
                let left = s.value_at(i - 1, 1.0).unwrap();
                let right = s.value_at(i, 0.0).unwrap();
                assert_eq!(left, right);
            }
        }
    }

    #[test]
    fn slope_is_continuous_at_internal_points() {
        for s in edit_history() {
            for i in 1..s.segment_count() {
                let left = s.segment(i - 1).unwrap().derivative_at(1.0);
                let right = s.segment(i).unwrap().derivative_at(0.0);
                assert_abs_diff_eq!(left, right, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn extrema_bound_every_edit() {
        for s in edit_history() {
            let range = s.extrema();
            for i in 0..=500 {
                let y = s.sample(f64::from(i) / 500.0).unwrap();
                assert!(range.contains(y, 1e-9), "{y} outside {range:?}");
            }
        }
    }

    #[test]
    fn history_values_stay_intact() {
        let history = edit_history();
        assert_eq!(history[0], HermiteSpline::new());
        assert_eq!(history[1].point_count(), 3);
        assert_eq!(history[2].point_count(), 4);
    }
}
