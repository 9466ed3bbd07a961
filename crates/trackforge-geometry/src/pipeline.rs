//! Pipeline driver.
//!
//! Runs the three geometry stages in order and aggregates their output.
//! The sampler runs once; the offsetter and segmenter consume the
//! centerline independently. Synchronous and single-threaded; a failed
//! stage aborts the run with no partial result.

use lyon::path::Path;
use tracing::info;
use trackforge_core::{Error, Result, TrackConfig};

use crate::{offset, sampler, segmenter};
use crate::track::TrackResult;

/// Generates a [`TrackResult`] from a parametric centerline path.
#[derive(Debug, Clone)]
pub struct TrackGenerator {
    config: TrackConfig,
}

impl TrackGenerator {
    /// Creates a generator after validating the configuration.
    pub fn new(config: TrackConfig) -> Result<Self> {
        config.validate().map_err(Error::Config)?;
        Ok(Self { config })
    }

    /// Creates a generator with the default configuration
    /// (width 200, segment length 400, 1000 samples).
    pub fn with_defaults() -> Self {
        Self {
            config: TrackConfig::default(),
        }
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// Runs the full pipeline: sample, offset borders, segment.
    pub fn generate(&self, path: &Path) -> Result<TrackResult> {
        let centerline = sampler::sample(path, self.config.sample_count)?;
        info!("Extracted {} centerline points", centerline.len());

        let (left_border, right_border) = offset::offset(&centerline, self.config.track_width)?;
        info!(
            "Generated {} left / {} right border points",
            left_border.len(),
            right_border.len()
        );

        let segments = segmenter::segment(
            &centerline,
            self.config.track_width,
            self.config.segment_length,
        )?;
        info!("Created {} segment divisions", segments.len());

        Ok(TrackResult::new(
            centerline,
            left_border,
            right_border,
            segments,
            self.config.track_width,
            self.config.segment_length,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::math::point;
    use trackforge_core::ConfigError;

    #[test]
    fn test_rejects_invalid_config() {
        let config = TrackConfig::new(-1.0, 400.0);
        let err = TrackGenerator::new(config).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_generate_open_line() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(800.0, 0.0));
        builder.end(false);
        let path = builder.build();

        let generator = TrackGenerator::new(TrackConfig::new(200.0, 400.0)).unwrap();
        let track = generator.generate(&path).unwrap();

        assert_eq!(track.centerline().len(), 1001);
        assert_eq!(track.segments().len(), 3);
        assert!(!track.left_border().is_empty());
        assert!(!track.right_border().is_empty());
        assert_eq!(track.track_width(), 200.0);
        assert_eq!(track.segment_length(), 400.0);
    }

    #[test]
    fn test_generate_aborts_on_empty_path() {
        let path = Path::builder().build();
        let generator = TrackGenerator::with_defaults();
        assert!(matches!(
            generator.generate(&path),
            Err(Error::Parse(_))
        ));
    }
}
