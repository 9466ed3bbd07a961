//! # Trackforge Core
//!
//! Shared foundation for the Trackforge workspace:
//! - Geometric value types used across the pipeline
//! - Error taxonomy for parsing, geometry, and configuration failures
//! - Pipeline configuration with validated defaults
//!
//! All error types use `thiserror` for ergonomic error handling.

pub mod config;
pub mod error;
pub mod types;

pub use config::TrackConfig;
pub use error::{
    ConfigError, Error, GeometryError, GeometryResult, ParseError, ParseResult, Result,
};
pub use types::Point;
