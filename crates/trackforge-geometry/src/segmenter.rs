//! Arc-length segmentation.
//!
//! Partitions the centerline into numbered segments at fixed arc-length
//! intervals. Each segment boundary carries a perpendicular cut line
//! spanning the track width. When the curve is a closed loop, a
//! near-duplicate wrap-around boundary is trimmed so the final segment
//! is not unnaturally short.

use tracing::{debug, info};
use trackforge_core::{GeometryError, GeometryResult, Point};

use crate::track::Segment;

/// Computes the cumulative Euclidean distance along the centerline.
/// `table[0] == 0`; the last entry is the total curve length. The table
/// is non-decreasing.
pub fn arc_length_table(centerline: &[Point]) -> Vec<f64> {
    let mut distances = Vec::with_capacity(centerline.len());
    distances.push(0.0);
    for pair in centerline.windows(2) {
        let last = distances[distances.len() - 1];
        distances.push(last + pair[0].distance_to(&pair[1]));
    }
    distances
}

/// Locates the interval `[distances[j], distances[j+1]]` containing
/// `target` and the interpolation fraction within it. Binary search over
/// the monotonic table; output is identical to a linear scan from the
/// start. Returns `None` for a zero-length interval (duplicate samples).
fn locate(distances: &[f64], target: f64) -> Option<(usize, f64)> {
    let idx = distances.partition_point(|d| *d < target);
    let j = idx.saturating_sub(1);
    if j + 1 >= distances.len() {
        return None;
    }
    let span = distances[j + 1] - distances[j];
    if span <= 0.0 {
        return None;
    }
    Some((j, (target - distances[j]) / span))
}

/// Segments the centerline with the closed-loop threshold set to the
/// track width (the reference heuristic).
pub fn segment(
    centerline: &[Point],
    width: f64,
    segment_length: f64,
) -> GeometryResult<Vec<Segment>> {
    segment_with_threshold(centerline, width, segment_length, width)
}

/// Segments the centerline into boundaries every `segment_length` units
/// of arc, renumbered contiguously from 1.
///
/// `closed_loop_threshold` controls the loop-detection heuristic: when
/// the end of the curve lies within this distance of its start, the
/// curve is treated as closed and a wrap-around boundary closer than
/// `segment_length` to the first boundary is dropped. This is a
/// heuristic proxy for closedness, not a topological test.
pub fn segment_with_threshold(
    centerline: &[Point],
    width: f64,
    segment_length: f64,
    closed_loop_threshold: f64,
) -> GeometryResult<Vec<Segment>> {
    if centerline.len() < 2 {
        return Err(GeometryError::TooFewPoints {
            count: centerline.len(),
            required: 2,
        });
    }

    let distances = arc_length_table(centerline);
    let total_length = distances[distances.len() - 1];
    if total_length <= 0.0 {
        return Err(GeometryError::ZeroArcLength);
    }

    let num_segments = (total_length / segment_length).floor() as usize;
    info!(
        "Track length {:.2}, placing {} segment(s) of {} units",
        total_length, num_segments, segment_length
    );
    if num_segments == 0 {
        return Ok(Vec::new());
    }

    let half_width = width / 2.0;
    let mut divisions = Vec::with_capacity(num_segments + 1);

    for k in 0..=num_segments {
        let target = k as f64 * segment_length;
        let Some((j, t)) = locate(&distances, target) else {
            debug!("Skipping boundary {} at arc {}: degenerate interval", k, target);
            continue;
        };

        let p1 = centerline[j];
        let p2 = centerline[j + 1];
        let center_point = p1.lerp(&p2, t);

        let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
        let norm = (dx * dx + dy * dy).sqrt();
        if norm <= 0.0 {
            debug!("Skipping boundary {} at arc {}: zero direction", k, target);
            continue;
        }
        let (perp_x, perp_y) = (-dy / norm, dx / norm);

        let line_start = Point::new(
            center_point.x - perp_x * half_width,
            center_point.y - perp_y * half_width,
        );
        let line_end = Point::new(
            center_point.x + perp_x * half_width,
            center_point.y + perp_y * half_width,
        );

        divisions.push(Segment::new(k, center_point, line_start, line_end, target));
    }

    trim_closed_loop(
        centerline,
        &mut divisions,
        segment_length,
        closed_loop_threshold,
    );

    for (i, division) in divisions.iter_mut().enumerate() {
        division.set_number(i + 1);
    }

    Ok(divisions)
}

/// Drops the last boundary of a closed loop when it sits within one
/// segment length of the first boundary: the wrap-around makes it a
/// near-duplicate of the start.
fn trim_closed_loop(
    centerline: &[Point],
    divisions: &mut Vec<Segment>,
    segment_length: f64,
    closed_loop_threshold: f64,
) {
    if divisions.len() < 2 {
        return;
    }
    let first_point = centerline[0];
    let last_point = centerline[centerline.len() - 1];
    if last_point.distance_to(&first_point) >= closed_loop_threshold {
        return;
    }

    let last_center = divisions[divisions.len() - 1].center_point();
    let first_center = divisions[0].center_point();
    let gap = last_center.distance_to(&first_center);
    if gap < segment_length {
        divisions.pop();
        debug!(
            "Removed wrap-around boundary: {:.2} < segment length {}",
            gap, segment_length
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line(length: f64, step: f64) -> Vec<Point> {
        let count = (length / step) as usize;
        (0..=count).map(|i| Point::new(i as f64 * step, 0.0)).collect()
    }

    /// Closed quasi-elliptical loop, total arc length ~1480 units.
    fn quasi_ellipse() -> Vec<Point> {
        (0..=400)
            .map(|i| {
                let theta = i as f64 / 400.0 * std::f64::consts::TAU;
                Point::new(300.0 * theta.cos(), 160.0 * theta.sin())
            })
            .collect()
    }

    #[test]
    fn test_arc_table_monotonic() {
        let table = arc_length_table(&quasi_ellipse());
        assert_eq!(table[0], 0.0);
        for pair in table.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_straight_line_boundaries() {
        let centerline = straight_line(800.0, 10.0);
        let segments = segment(&centerline, 200.0, 400.0).unwrap();
        assert_eq!(segments.len(), 3);
        let arcs: Vec<f64> = segments.iter().map(|s| s.arc_distance()).collect();
        assert_eq!(arcs, vec![0.0, 400.0, 800.0]);
        let numbers: Vec<usize> = segments.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        // Open curve: no trim, and segment 2 sits exactly at the midpoint.
        assert_eq!(segments[1].center_point(), Point::new(400.0, 0.0));
    }

    #[test]
    fn test_cut_lines_span_track_width() {
        let centerline = quasi_ellipse();
        let segments = segment(&centerline, 200.0, 400.0).unwrap();
        assert!(!segments.is_empty());
        for s in &segments {
            let a = s.line_start().distance_to(&s.center_point());
            let b = s.line_end().distance_to(&s.center_point());
            assert!((a - 100.0).abs() / 100.0 < 1e-6);
            assert!((b - 100.0).abs() / 100.0 < 1e-6);
            // Collinear through the center point.
            let mid = s.line_start().lerp(&s.line_end(), 0.5);
            assert!(mid.distance_to(&s.center_point()) < 1e-6);
        }
    }

    #[test]
    fn test_closed_loop_trims_wraparound() {
        let centerline = quasi_ellipse();
        let table = arc_length_table(&centerline);
        let total = *table.last().unwrap();
        assert!((total - 1480.0).abs() < 20.0, "total length {}", total);

        // floor(~1480 / 400) + 1 = 4 boundaries pre-trim; the loop wraps
        // within one segment length, so one gets dropped.
        let segments = segment(&centerline, 200.0, 400.0).unwrap();
        assert_eq!(segments.len(), 3);
        let numbers: Vec<usize> = segments.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_trim_removes_at_most_one() {
        let centerline = quasi_ellipse();
        let total = *arc_length_table(&centerline).last().unwrap();
        let pre_trim = (total / 400.0).floor() as usize + 1;
        let segments = segment(&centerline, 200.0, 400.0).unwrap();
        assert_eq!(segments.len(), pre_trim - 1);
    }

    #[test]
    fn test_short_curve_yields_no_segments() {
        let centerline = straight_line(300.0, 10.0);
        let segments = segment(&centerline, 200.0, 400.0).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_degenerate_centerlines() {
        assert!(matches!(
            segment(&[Point::new(0.0, 0.0)], 200.0, 400.0),
            Err(GeometryError::TooFewPoints { count: 1, .. })
        ));
        let stationary = vec![Point::new(3.0, 3.0); 5];
        assert_eq!(
            segment(&stationary, 200.0, 400.0),
            Err(GeometryError::ZeroArcLength)
        );
    }

    #[test]
    fn test_arc_distances_strictly_increasing() {
        let segments = segment(&quasi_ellipse(), 200.0, 300.0).unwrap();
        for pair in segments.windows(2) {
            assert!(pair[1].arc_distance() > pair[0].arc_distance());
        }
    }

    #[test]
    fn test_locate_matches_linear_scan() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        let distances = arc_length_table(&points);

        for &target in &[0.0, 2.5, 5.0, 7.5, 10.0] {
            let expected = distances
                .windows(2)
                .enumerate()
                .find(|(_, w)| w[0] <= target && target <= w[1] && w[1] > w[0])
                .map(|(j, w)| (j, (target - w[0]) / (w[1] - w[0])));
            assert_eq!(locate(&distances, target), expected, "target {}", target);
        }
    }
}
