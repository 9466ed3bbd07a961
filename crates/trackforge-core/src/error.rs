//! Error handling for Trackforge.
//!
//! Provides structured error types for the layers of the pipeline:
//! - Parse errors (SVG / path description input)
//! - Geometry errors (degenerate centerlines)
//! - Configuration errors (invalid pipeline parameters)
//!
//! All error types use `thiserror` for ergonomic error handling. The
//! geometry pipeline never retries: parse and geometry errors abort the
//! run and propagate unmodified to the caller.

use std::io;
use thiserror::Error;

/// Errors raised while extracting a parametric path from input data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no path elements.
    #[error("No paths found in SVG input")]
    NoPaths,

    /// A path element was present but contained no drawable primitives.
    #[error("Path contains no drawable primitives")]
    EmptyPath,

    /// The path data could not be interpreted.
    #[error("Invalid path data: {0}")]
    InvalidPathData(String),
}

/// Errors raised when a pipeline stage receives a degenerate centerline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The centerline does not carry enough points for the operation.
    #[error("Centerline has {count} point(s), at least {required} required")]
    TooFewPoints {
        /// Number of points received.
        count: usize,
        /// Minimum number of points required.
        required: usize,
    },

    /// The centerline collapsed to a single location (zero arc length).
    #[error("Centerline has zero total arc length")]
    ZeroArcLength,
}

/// Errors raised while validating pipeline configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A scalar parameter must be strictly positive.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NotPositive {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// The resampling resolution must be at least one.
    #[error("Sample count must be at least 1")]
    ZeroSampleCount,
}

/// Umbrella error type for the Trackforge pipeline and its glue layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Input parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A geometry stage failed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Pipeline configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Trackforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for geometry operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
