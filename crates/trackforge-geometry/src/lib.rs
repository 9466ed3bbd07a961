//! # Trackforge Geometry
//!
//! The geometric core of Trackforge: turns a single parametric centerline
//! curve into the full description of a racetrack.
//!
//! ## Pipeline stages
//!
//! 1. **Sampler**: resamples a `lyon` path into a dense, ordered point
//!    sequence (the centerline).
//! 2. **Offsetter**: computes left and right border curves at half the
//!    track width, with a perpendicular-estimate fallback when the
//!    primary buffer offset cannot produce a usable curve.
//! 3. **Segmenter**: partitions the centerline by arc length into
//!    numbered segments with perpendicular cut lines, trimming the
//!    wrap-around segment of closed loops.
//!
//! The sampler runs once; the offsetter and segmenter consume its output
//! independently. [`pipeline::TrackGenerator`] drives all three and
//! aggregates the results into a [`track::TrackResult`].

pub mod offset;
pub mod pipeline;
pub mod sampler;
pub mod segmenter;
pub mod track;

pub use offset::{offset, BufferOffset, OffsetStrategy, PerpendicularOffset};
pub use pipeline::TrackGenerator;
pub use sampler::sample;
pub use segmenter::{arc_length_table, segment, segment_with_threshold};
pub use track::{BorderCurve, Centerline, Segment, Side, TrackResult};
