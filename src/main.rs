use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use trackforge::{first_path, init_logging, TrackConfig, TrackGenerator};

/// Generate racetrack geometry from an SVG centerline.
#[derive(Parser, Debug)]
#[command(name = "trackforge", version, about)]
struct Args {
    /// SVG file whose first path is the track centerline.
    svg: PathBuf,

    /// Track width; borders are offset by half this value.
    #[arg(long, default_value_t = 200.0)]
    track_width: f64,

    /// Target arc length per segment.
    #[arg(long, default_value_t = 400.0)]
    segment_length: f64,

    /// Centerline resampling resolution.
    #[arg(long, default_value_t = 1000)]
    sample_count: usize,

    /// Write the JSON track description here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    let svg = fs::read_to_string(&args.svg)
        .with_context(|| format!("Failed to read SVG file {}", args.svg.display()))?;
    let path = first_path(&svg)?;

    let config = TrackConfig {
        track_width: args.track_width,
        segment_length: args.segment_length,
        sample_count: args.sample_count,
    };
    let generator = TrackGenerator::new(config)?;
    let track = generator.generate(&path)?;

    info!(
        "Track generated: {} segments, width {}, segment length {}",
        track.segments().len(),
        track.track_width(),
        track.segment_length()
    );

    let json = serde_json::to_string_pretty(&track)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Track written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
