//! # Trackforge
//!
//! Converts a freehand centerline curve (the first path of an SVG file)
//! into the geometric description of a racetrack: two border curves
//! offset at half the track width, plus a partition of the track into
//! numbered, equal-arc-length segments with perpendicular cut lines.
//!
//! ## Architecture
//!
//! Trackforge is organized as a workspace with multiple crates:
//!
//! 1. **trackforge-core** - Shared types, error taxonomy, configuration
//! 2. **trackforge-geometry** - Sampler, border offsetter, segmenter,
//!    and the pipeline driver
//! 3. **trackforge-svg** - SVG centerline extraction
//! 4. **trackforge-session** - Handle-to-result registry for callers
//!    that keep tracks alive across edits
//! 5. **trackforge** - Command-line binary that integrates all crates

pub use trackforge_core::{
    ConfigError, Error, GeometryError, ParseError, Point, Result, TrackConfig,
};
pub use trackforge_geometry::{
    BorderCurve, BufferOffset, Centerline, OffsetStrategy, PerpendicularOffset, Segment, Side,
    TrackGenerator, TrackResult,
};
pub use trackforge_session::{SessionId, TrackRegistry};
pub use trackforge_svg::{extract_paths, first_path};

/// Initializes tracing with an environment-controlled filter
/// (`RUST_LOG`), defaulting to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
