//! Property tests for the geometry pipeline over randomized polylines.

use proptest::prelude::*;
use trackforge_core::Point;
use trackforge_geometry::{arc_length_table, offset, segment, PerpendicularOffset, OffsetStrategy};

/// Random open polyline built from bounded steps, at least 2 points.
fn polyline_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..60).prop_map(|steps| {
        let mut points = vec![Point::new(0.0, 0.0)];
        for (dx, dy) in steps {
            let last = points[points.len() - 1];
            points.push(Point::new(last.x + dx, last.y + dy));
        }
        points
    })
}

proptest! {
    #[test]
    fn arc_table_is_non_decreasing(points in polyline_strategy()) {
        let table = arc_length_table(&points);
        prop_assert_eq!(table.len(), points.len());
        prop_assert_eq!(table[0], 0.0);
        for pair in table.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn segment_numbers_are_contiguous_from_one(
        points in polyline_strategy(),
        width in 1.0f64..100.0,
        segment_length in 5.0f64..200.0,
    ) {
        let total = *arc_length_table(&points).last().unwrap();
        prop_assume!(total > 0.0);

        let segments = segment(&points, width, segment_length).unwrap();
        for (i, s) in segments.iter().enumerate() {
            prop_assert_eq!(s.number(), i + 1);
        }
        for pair in segments.windows(2) {
            prop_assert!(pair[1].arc_distance() > pair[0].arc_distance());
        }
    }

    #[test]
    fn cut_lines_are_half_width_from_center(
        points in polyline_strategy(),
        width in 1.0f64..100.0,
    ) {
        let total = *arc_length_table(&points).last().unwrap();
        prop_assume!(total > 0.0);

        let segments = segment(&points, width, total / 4.0).unwrap();
        let half = width / 2.0;
        for s in &segments {
            let a = s.line_start().distance_to(&s.center_point());
            let b = s.line_end().distance_to(&s.center_point());
            prop_assert!((a - half).abs() / half < 1e-6);
            prop_assert!((b - half).abs() / half < 1e-6);
        }
    }

    #[test]
    fn borders_exist_for_any_nondegenerate_polyline(
        points in polyline_strategy(),
        width in 1.0f64..100.0,
    ) {
        let total = *arc_length_table(&points).last().unwrap();
        prop_assume!(total > 0.0);

        let (left, right) = offset(&points, width).unwrap();
        prop_assert!(!left.is_empty());
        prop_assert!(!right.is_empty());
        for p in left.points().iter().chain(right.points()) {
            prop_assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn fallback_emits_at_most_one_point_per_sample(
        points in polyline_strategy(),
        width in 1.0f64..100.0,
    ) {
        if let Some((left, right)) = PerpendicularOffset.offset(&points, width / 2.0) {
            prop_assert!(left.len() <= points.len());
            prop_assert_eq!(left.len(), right.len());
        }
    }
}
