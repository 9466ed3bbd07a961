//! Pipeline configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Scalar parameters accepted by the track generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Width of the track; the perpendicular border offset is half this value.
    pub track_width: f64,
    /// Target arc length per segment.
    pub segment_length: f64,
    /// Resampling resolution: the centerline gets `sample_count + 1` points.
    pub sample_count: usize,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            track_width: 200.0,
            segment_length: 400.0,
            sample_count: 1000,
        }
    }
}

impl TrackConfig {
    /// Creates a configuration with the given track width and segment
    /// length and the default sample count.
    pub fn new(track_width: f64, segment_length: f64) -> Self {
        Self {
            track_width,
            segment_length,
            ..Self::default()
        }
    }

    /// Validates the configuration, rejecting non-positive parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.track_width > 0.0) {
            return Err(ConfigError::NotPositive {
                name: "track_width".to_string(),
                value: self.track_width,
            });
        }
        if !(self.segment_length > 0.0) {
            return Err(ConfigError::NotPositive {
                name: "segment_length".to_string(),
                value: self.segment_length,
            });
        }
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        Ok(())
    }
}
