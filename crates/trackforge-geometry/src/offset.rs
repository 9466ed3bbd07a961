//! Border offsetting.
//!
//! Produces the left and right border curves at half the track width.
//! Two strategies implement [`OffsetStrategy`]:
//!
//! - [`BufferOffset`] (primary): parallel offset of the centerline
//!   polyline via `cavalier_contours`, with rounded joins. Topologically
//!   complex inputs may come back as multiple disjoint plines; those are
//!   concatenated per side in the order the offset returns them.
//! - [`PerpendicularOffset`] (fallback): per-point perpendicular
//!   estimate from central/one-sided tangent differences. Only
//!   approximately a true offset curve, but it cannot fail for a
//!   centerline with at least two distinct points.
//!
//! The driver tries the primary strategy and falls back on its returned
//! failure; the switch is logged and never surfaced to the caller.

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use tracing::{debug, warn};
use trackforge_core::{GeometryError, GeometryResult, Point};

use crate::track::{BorderCurve, Side};

/// Minimum centerline size any offset strategy accepts.
const MIN_POINTS: usize = 2;

/// Tolerance for collapsing duplicate consecutive vertices before the
/// buffer offset; matches the duplicate-sample scale of the sampler.
const DUPLICATE_TOLERANCE: f64 = 1e-9;

/// A border construction strategy. Returns `None` when it cannot
/// produce a usable curve for each side, leaving the decision to the
/// driver rather than unwinding.
pub trait OffsetStrategy {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Offsets the centerline by `half_width` on each side, returning
    /// `(left, right)` point sequences.
    fn offset(&self, centerline: &[Point], half_width: f64) -> Option<(Vec<Point>, Vec<Point>)>;
}

/// Primary strategy: geometric parallel offset of the centerline.
#[derive(Debug, Default)]
pub struct BufferOffset;

impl BufferOffset {
    fn build_polyline(centerline: &[Point]) -> Polyline {
        let mut polyline: Polyline = Polyline::new();
        for p in centerline {
            let is_duplicate = polyline
                .vertex_data
                .last()
                .map(|v| (p.x - v.x).abs() <= DUPLICATE_TOLERANCE
                    && (p.y - v.y).abs() <= DUPLICATE_TOLERANCE)
                .unwrap_or(false);
            if !is_duplicate {
                polyline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
            }
        }
        polyline.set_is_closed(false);
        polyline
    }

    fn collect_side(polyline: &Polyline, distance: f64) -> Option<Vec<Point>> {
        let offsets = polyline.parallel_offset(distance);
        if offsets.is_empty() {
            return None;
        }
        let mut points = Vec::new();
        for offset_path in &offsets {
            for v in &offset_path.vertex_data {
                points.push(Point::new(v.x, v.y));
            }
        }
        if points.len() < MIN_POINTS {
            return None;
        }
        Some(points)
    }
}

impl OffsetStrategy for BufferOffset {
    fn name(&self) -> &'static str {
        "buffer"
    }

    fn offset(&self, centerline: &[Point], half_width: f64) -> Option<(Vec<Point>, Vec<Point>)> {
        let polyline = Self::build_polyline(centerline);
        if polyline.vertex_data.len() < MIN_POINTS {
            return None;
        }
        let left = Self::collect_side(&polyline, half_width)?;
        let right = Self::collect_side(&polyline, -half_width)?;
        debug!(
            "Buffer offset produced {} left / {} right border points",
            left.len(),
            right.len()
        );
        Some((left, right))
    }
}

/// Fallback strategy: local perpendicular estimate per centerline point.
#[derive(Debug, Default)]
pub struct PerpendicularOffset;

impl OffsetStrategy for PerpendicularOffset {
    fn name(&self) -> &'static str {
        "perpendicular"
    }

    fn offset(&self, centerline: &[Point], half_width: f64) -> Option<(Vec<Point>, Vec<Point>)> {
        let n = centerline.len();
        if n < MIN_POINTS {
            return None;
        }

        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);

        for i in 0..n {
            // Central difference for interior points, one-sided at the ends.
            let (dx, dy) = if i == 0 {
                (
                    centerline[1].x - centerline[0].x,
                    centerline[1].y - centerline[0].y,
                )
            } else if i == n - 1 {
                (
                    centerline[n - 1].x - centerline[n - 2].x,
                    centerline[n - 1].y - centerline[n - 2].y,
                )
            } else {
                (
                    centerline[i + 1].x - centerline[i - 1].x,
                    centerline[i + 1].y - centerline[i - 1].y,
                )
            };

            let norm = (dx * dx + dy * dy).sqrt();
            if norm <= 0.0 {
                // Duplicate consecutive samples: skip rather than divide
                // by zero.
                continue;
            }

            let (perp_x, perp_y) = (-dy / norm, dx / norm);
            let current = centerline[i];
            left.push(Point::new(
                current.x + perp_x * half_width,
                current.y + perp_y * half_width,
            ));
            right.push(Point::new(
                current.x - perp_x * half_width,
                current.y - perp_y * half_width,
            ));
        }

        if left.is_empty() {
            return None;
        }
        Some((left, right))
    }
}

/// Computes both border curves for a centerline and track width.
///
/// Fails with [`GeometryError`] only when the centerline has fewer than
/// two points or no two distinct points; otherwise the fallback
/// guarantees success.
pub fn offset(centerline: &[Point], width: f64) -> GeometryResult<(BorderCurve, BorderCurve)> {
    if centerline.len() < MIN_POINTS {
        return Err(GeometryError::TooFewPoints {
            count: centerline.len(),
            required: MIN_POINTS,
        });
    }

    let half_width = width / 2.0;
    let primary = BufferOffset;
    let (left, right) = match primary.offset(centerline, half_width) {
        Some(curves) => curves,
        None => {
            warn!(
                "{} offset failed to produce usable borders, using {} estimate",
                primary.name(),
                PerpendicularOffset.name()
            );
            PerpendicularOffset
                .offset(centerline, half_width)
                .ok_or(GeometryError::ZeroArcLength)?
        }
    };

    Ok((
        BorderCurve::new(Side::Left, left),
        BorderCurve::new(Side::Right, right),
    ))
}
