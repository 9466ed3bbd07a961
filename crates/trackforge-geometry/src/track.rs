//! Track data model.
//!
//! The aggregate [`TrackResult`] is the unit handed to external
//! collaborators (rendering, serialization, session storage). It is
//! immutable once constructed except for the two narrow segment
//! mutations: [`TrackResult::mark_curve`] and
//! [`TrackResult::reposition_segment`].

use serde::ser::Serializer;
use serde::Serialize;
use trackforge_core::Point;

/// Ordered point sequence in curve traversal order. The first and last
/// points may coincide (closed loop) or not (open curve).
pub type Centerline = Vec<Point>;

/// Which side of the centerline a border curve lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// A border curve: points nominally `track_width / 2` from the
/// centerline, perpendicular to the local tangent, tagged with a side.
///
/// Serializes as a bare point list; the side is a runtime tag only.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderCurve {
    side: Side,
    points: Vec<Point>,
}

impl BorderCurve {
    pub fn new(side: Side, points: Vec<Point>) -> Self {
        Self { side, points }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Serialize for BorderCurve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

/// One numbered lateral slice of the track, delimited by a perpendicular
/// cut line at a fixed arc-length interval.
///
/// Fields are private: the numbering and arc-distance invariants are
/// maintained by the segmenter, and mutation is restricted to the two
/// operations exposed on [`TrackResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    #[serde(rename = "segment_number")]
    number: usize,
    center_point: Point,
    line_start: Point,
    line_end: Point,
    #[serde(rename = "distance")]
    arc_distance: f64,
    is_curve: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed_limit: Option<u32>,
}

impl Segment {
    pub(crate) fn new(
        number: usize,
        center_point: Point,
        line_start: Point,
        line_end: Point,
        arc_distance: f64,
    ) -> Self {
        Self {
            number,
            center_point,
            line_start,
            line_end,
            arc_distance,
            is_curve: false,
            speed_limit: None,
        }
    }

    pub(crate) fn set_number(&mut self, number: usize) {
        self.number = number;
    }

    /// Segment number, contiguous from 1 in traversal order.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Point on the centerline where the cut line crosses.
    pub fn center_point(&self) -> Point {
        self.center_point
    }

    /// One end of the perpendicular cut line.
    pub fn line_start(&self) -> Point {
        self.line_start
    }

    /// The other end of the perpendicular cut line.
    pub fn line_end(&self) -> Point {
        self.line_end
    }

    /// Arc length from the path start to this segment boundary.
    pub fn arc_distance(&self) -> f64 {
        self.arc_distance
    }

    /// Whether this segment has been marked as part of a curve.
    pub fn is_curve(&self) -> bool {
        self.is_curve
    }

    /// Speed limit for curve segments, if one has been assigned.
    pub fn speed_limit(&self) -> Option<u32> {
        self.speed_limit
    }
}

/// Aggregate result of one pipeline run: the centerline, both border
/// curves, the ordered segment list, and the scalar parameters used to
/// produce them (echoed back for reproducibility).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackResult {
    centerline: Centerline,
    left_border: BorderCurve,
    right_border: BorderCurve,
    segments: Vec<Segment>,
    track_width: f64,
    segment_length: f64,
}

impl TrackResult {
    pub fn new(
        centerline: Centerline,
        left_border: BorderCurve,
        right_border: BorderCurve,
        segments: Vec<Segment>,
        track_width: f64,
        segment_length: f64,
    ) -> Self {
        Self {
            centerline,
            left_border,
            right_border,
            segments,
            track_width,
            segment_length,
        }
    }

    pub fn centerline(&self) -> &[Point] {
        &self.centerline
    }

    pub fn left_border(&self) -> &BorderCurve {
        &self.left_border
    }

    pub fn right_border(&self) -> &BorderCurve {
        &self.right_border
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    /// Marks every segment whose number lies in
    /// `[start_number, end_number]` (inclusive) as a curve with the
    /// given speed limit. Segments outside the range keep their
    /// existing state; out-of-range numbers are silently ignored.
    ///
    /// Idempotent: applying the same mark twice yields the same result
    /// as applying it once.
    pub fn mark_curve(&mut self, start_number: usize, end_number: usize, speed_limit: u32) {
        for segment in &mut self.segments {
            if (start_number..=end_number).contains(&segment.number) {
                segment.is_curve = true;
                segment.speed_limit = Some(speed_limit);
            }
        }
    }

    /// Relocates the center point of the segment with the given number.
    /// Returns `false` when no such segment exists.
    ///
    /// Only `center_point` changes: the cut line
    /// (`line_start`/`line_end`) and arc distance are NOT recomputed and
    /// go stale relative to the new location. This mirrors the reference
    /// behavior, where the recomputation rule was left unspecified.
    pub fn reposition_segment(&mut self, number: usize, new_center: Point) -> bool {
        match self.segments.iter_mut().find(|s| s.number == number) {
            Some(segment) => {
                segment.center_point = new_center;
                true
            }
            None => false,
        }
    }

    /// Serializes the track to the JSON wire format consumed by UI and
    /// rendering collaborators.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
