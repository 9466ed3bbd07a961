//! Centerline sampling.
//!
//! Evaluates a `lyon` path at a fixed number of equally spaced values of
//! a global parameter `u` over the whole path, producing the ordered
//! point sequence the rest of the pipeline consumes.
//!
//! Sampling is uniform in the chained curve parameter, not in arc
//! length: each drawable primitive owns an equal share of `u`, so point
//! density is higher where the underlying parametrization is slower
//! (e.g. tight Bezier control points). Downstream consumers must not
//! assume uniform spacing.

use lyon::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use lyon::path::{Event, Path};
use tracing::debug;
use trackforge_core::{ParseError, ParseResult, Point};

use crate::track::Centerline;

/// One drawable primitive of a path, evaluable over `t in [0, 1]`.
#[derive(Debug, Clone)]
enum CurveSpan {
    Line(LineSegment<f32>),
    Quadratic(QuadraticBezierSegment<f32>),
    Cubic(CubicBezierSegment<f32>),
}

impl CurveSpan {
    fn sample(&self, t: f32) -> Point {
        let p = match self {
            CurveSpan::Line(seg) => seg.sample(t),
            CurveSpan::Quadratic(seg) => seg.sample(t),
            CurveSpan::Cubic(seg) => seg.sample(t),
        };
        Point::new(p.x as f64, p.y as f64)
    }
}

/// Decomposes a path into evaluable spans. A close event emits the
/// closing line back to the subpath start when it covers any distance.
fn collect_spans(path: &Path) -> Vec<CurveSpan> {
    let mut spans = Vec::new();
    for event in path.iter() {
        match event {
            Event::Begin { .. } => {}
            Event::Line { from, to } => {
                spans.push(CurveSpan::Line(LineSegment { from, to }));
            }
            Event::Quadratic { from, ctrl, to } => {
                spans.push(CurveSpan::Quadratic(QuadraticBezierSegment { from, ctrl, to }));
            }
            Event::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                spans.push(CurveSpan::Cubic(CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                }));
            }
            Event::End { last, first, close } => {
                if close && last != first {
                    spans.push(CurveSpan::Line(LineSegment {
                        from: last,
                        to: first,
                    }));
                }
            }
        }
    }
    spans
}

/// Samples a path at `sample_count + 1` equally spaced parameter values,
/// returning the points in traversal order.
///
/// The first and last points are the curve evaluated at `u = 0` and
/// `u = 1`. Fails with [`ParseError::EmptyPath`] when the path contains
/// no drawable primitives.
pub fn sample(path: &Path, sample_count: usize) -> ParseResult<Centerline> {
    let spans = collect_spans(path);
    if spans.is_empty() {
        return Err(ParseError::EmptyPath);
    }

    let steps = sample_count.max(1);
    let span_count = spans.len() as f64;
    let mut points = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let u = i as f64 / steps as f64;
        let scaled = u * span_count;
        let index = (scaled.floor() as usize).min(spans.len() - 1);
        let t = (scaled - index as f64) as f32;
        points.push(spans[index].sample(t));
    }

    debug!(
        "Sampled {} centerline points from {} path primitives",
        points.len(),
        spans.len()
    );
    Ok(points)
}
