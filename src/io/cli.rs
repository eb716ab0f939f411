//! Command-line interface gathering mosaic configuration and driving the engine

use crate::engine::assembly::grid_blocks;
use crate::engine::{MetricKind, MosaicConfig, MosaicEngine};
use crate::io::configuration::{
    DEFAULT_ALPHA_BLEND_INTENSITY, DEFAULT_COLOR_CORRECTION_INTENSITY, DEFAULT_GRID_STEP,
    DEFAULT_SEAM_SMOOTHING_INTENSITY, DEFAULT_TILE_SIZE, OUTPUT_SUFFIX,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::progress::BlockProgress;
use crate::post::PostProcessConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mosaictile")]
#[command(
    author,
    version,
    about = "Assemble a photomosaic from a source image and a tile directory"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Source image to rebuild as a mosaic
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory of candidate tile images
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Tile edge length in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Grid cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_GRID_STEP)]
    pub grid_step: u32,

    /// Matching metric: color, color_contrast, gradient, or texture
    #[arg(short, long, default_value = "color")]
    pub metric: String,

    /// Limit how many times one tile may be reused
    #[arg(long, value_name = "N")]
    pub max_repeats: Option<u32>,

    /// Rotate tiles by this many degrees at load time
    #[arg(short, long, value_name = "DEGREES")]
    pub rotate: Option<f32>,

    /// Post-process effect to append, in application order (repeatable)
    #[arg(short, long = "effect", value_name = "NAME[=INTENSITY]")]
    pub effects: Vec<String>,

    /// Output path (defaults to the source name with a suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the mosaic will be written
    ///
    /// Defaults to the source file's name with the output suffix, as a PNG,
    /// next to the source.
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let stem = self.source.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());
        if let Some(parent) = self.source.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

// Per-effect intensity used when the argument gives only a name.
fn default_intensity(name: &str) -> f64 {
    match name {
        "seam_smoothing" => DEFAULT_SEAM_SMOOTHING_INTENSITY,
        "alpha_blend" => DEFAULT_ALPHA_BLEND_INTENSITY,
        _ => DEFAULT_COLOR_CORRECTION_INTENSITY,
    }
}

/// Parse one `NAME[=INTENSITY]` effect specification
///
/// A bare name takes the effect's default intensity. Whether the name refers
/// to a real effect is not decided here; unknown names flow through and are
/// dropped (with a notice) when the pipeline is built.
///
/// # Errors
///
/// Returns an error when the intensity is not a number in [0, 1].
pub fn parse_effect_spec(spec: &str) -> Result<(String, f64)> {
    let Some((name, value)) = spec.split_once('=') else {
        return Ok((spec.to_string(), default_intensity(spec)));
    };

    let intensity: f64 = value
        .parse()
        .ok()
        .ok_or_else(|| invalid_parameter("effect", &spec, &"intensity must be a number"))?;
    if !(0.0..=1.0).contains(&intensity) {
        return Err(invalid_parameter(
            "effect",
            &spec,
            &"intensity must be between 0 and 1",
        ));
    }
    Ok((name.to_string(), intensity))
}

/// Drives one end-to-end mosaic run from parsed arguments
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the source and tiles, assemble the mosaic, and save it
    ///
    /// # Errors
    ///
    /// Returns an error if the source image or tile directory cannot be
    /// read, no tiles load, the metric name or an effect intensity is
    /// invalid, or the result cannot be saved.
    // Allow print for user feedback on skipped files and completion
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let source_image = image::open(&self.cli.source)
            .map_err(|source| MosaicError::ImageLoad {
                path: self.cli.source.clone(),
                source,
            })?
            .to_rgb8();

        let mut engine = MosaicEngine::new();
        let report = engine.load_tiles(
            &self.cli.tiles,
            self.cli.tile_size,
            self.cli.rotate.is_some(),
            self.cli.rotate.unwrap_or(0.0),
        )?;
        if !self.cli.quiet && !report.skipped.is_empty() {
            eprintln!("Skipped {} undecodable tile file(s)", report.skipped.len());
        }
        if report.loaded == 0 {
            return Err(MosaicError::NoTilesLoaded);
        }

        let metric =
            MetricKind::from_name(&self.cli.metric).ok_or_else(|| MosaicError::UnknownMetric {
                name: self.cli.metric.clone(),
            })?;
        let config = MosaicConfig {
            tile_size: self.cli.tile_size,
            grid_step: self.cli.grid_step,
            limit_repeats: self.cli.max_repeats.is_some(),
            max_repeats: self.cli.max_repeats.unwrap_or(u32::MAX),
            rotation: self.cli.rotate.is_some(),
            rotation_angle: self.cli.rotate.unwrap_or(0.0),
            metric,
        };

        let mut post_config = PostProcessConfig {
            grid_size: self.cli.grid_step,
            ..PostProcessConfig::default()
        };
        for spec in &self.cli.effects {
            let (name, intensity) = parse_effect_spec(spec)?;
            post_config.add_effect(&name, intensity);
        }
        let ignored = engine.set_post_process_config(&post_config);
        if !self.cli.quiet && !ignored.is_empty() {
            eprintln!("Ignoring unknown effect(s): {}", ignored.join(", "));
        }

        let block_count = grid_blocks(
            source_image.width(),
            source_image.height(),
            config.grid_step,
        )
        .len() as u64;
        let progress = self
            .cli
            .should_show_progress()
            .then(|| BlockProgress::new(block_count));

        let mosaic = engine.create_mosaic(&source_image, &config, progress.as_ref())?;
        if let Some(bar) = &progress {
            bar.finish();
        }

        let output = self.cli.output_path();
        mosaic.save(&output).map_err(|source| MosaicError::ImageExport {
            path: output.clone(),
            source,
        })?;
        if !self.cli.quiet {
            eprintln!("Wrote {}", output.display());
        }
        Ok(())
    }
}
