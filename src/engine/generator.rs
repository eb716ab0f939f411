//! Engine orchestration: tile ownership, metric swaps, and mosaic creation

use crate::engine::assembly::{AssemblySession, assemble};
use crate::engine::metric::MetricKind;
use crate::engine::tiles::Tile;
use crate::io::configuration::{DEFAULT_GRID_STEP, DEFAULT_TILE_SIZE};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::library::{LoadOutcome, LoadReport, load_tiles};
use crate::io::progress::BlockProgress;
use crate::post::pipeline::{PostProcessConfig, PostProcessPipeline};
use image::RgbImage;
use std::path::Path;

/// Parameters of one mosaic creation pass
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    /// Edge length of loaded tiles, in pixels (positive)
    pub tile_size: u32,
    /// Edge length of grid cells, in pixels (positive); need not equal the
    /// tile size
    pub grid_step: u32,
    /// Whether the per-tile reuse budget is enforced
    pub limit_repeats: bool,
    /// Reuse budget per tile when limited (positive)
    pub max_repeats: u32,
    /// Whether tiles are rotated at load time
    pub rotation: bool,
    /// Rotation angle in degrees, applied when rotation is enabled
    pub rotation_angle: f32,
    /// The comparison strategy for this pass
    pub metric: MetricKind,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            grid_step: DEFAULT_GRID_STEP,
            limit_repeats: false,
            max_repeats: u32::MAX,
            rotation: false,
            rotation_angle: 0.0,
            metric: MetricKind::Color,
        }
    }
}

impl MosaicConfig {
    /// Effective per-tile budget for one assembly pass
    pub const fn repeat_budget(&self) -> u32 {
        if self.limit_repeats {
            self.max_repeats
        } else {
            u32::MAX
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"tile size must be positive",
            ));
        }
        if self.grid_step == 0 {
            return Err(invalid_parameter(
                "grid_step",
                &self.grid_step,
                &"grid step must be positive",
            ));
        }
        if self.limit_repeats && self.max_repeats == 0 {
            return Err(invalid_parameter(
                "max_repeats",
                &self.max_repeats,
                &"repeat budget must be positive when repeats are limited",
            ));
        }
        Ok(())
    }
}

/// The mosaic engine: owns the tile collection, the active metric, and the
/// post-process chain
///
/// A single engine instance serves one caller at a time: metric swaps rewrite
/// every tile's descriptors in place, so the type is deliberately not shared
/// across threads mid-operation.
#[derive(Debug, Default)]
pub struct MosaicEngine {
    tiles: Vec<Tile>,
    metric: MetricKind,
    pipeline: PostProcessPipeline,
}

impl MosaicEngine {
    /// Create an engine with no tiles, the color metric, and an empty
    /// post-process chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tile collection from a directory of images
    ///
    /// Descriptors are computed under the currently active metric. The
    /// returned report says how many tiles loaded and which files were
    /// skipped as undecodable; callers should check for a zero count before
    /// assembling.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or `tile_size` is
    /// zero. Undecodable files are skipped, not errors.
    pub fn load_tiles(
        &mut self,
        folder: &Path,
        tile_size: u32,
        rotation_enabled: bool,
        rotation_angle: f32,
    ) -> Result<LoadReport> {
        let LoadOutcome { tiles, skipped } = load_tiles(
            folder,
            tile_size,
            rotation_enabled,
            rotation_angle,
            self.metric,
        )?;
        self.tiles = tiles;
        Ok(LoadReport {
            loaded: self.tiles.len(),
            skipped,
        })
    }

    /// Select the active metric by name and recompute all tile descriptors
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::UnknownMetric`] when the name matches no
    /// strategy; the previous metric stays active in that case.
    pub fn set_metric(&mut self, name: &str) -> Result<()> {
        let kind = MetricKind::from_name(name).ok_or_else(|| MosaicError::UnknownMetric {
            name: name.to_string(),
        })?;
        self.set_metric_kind(kind);
        Ok(())
    }

    /// Select the active metric directly and recompute all tile descriptors
    ///
    /// This is the only mutation path for tile descriptors after load time.
    /// The recompute is synchronous and O(tiles); already-created mosaics are
    /// unaffected.
    pub fn set_metric_kind(&mut self, kind: MetricKind) {
        self.metric = kind;
        for tile in &mut self.tiles {
            tile.features = kind.compute_features(&tile.image);
        }
    }

    /// The currently active metric
    pub const fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Number of loaded tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The loaded tiles in insertion order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Drop all loaded tiles
    pub fn clear_tiles(&mut self) {
        self.tiles.clear();
    }

    /// Rebuild the post-process chain from a configuration
    ///
    /// Returns the effect names that matched no known effect and were
    /// dropped; unknown names never fail the rebuild.
    pub fn set_post_process_config(&mut self, config: &PostProcessConfig) -> Vec<String> {
        let build = PostProcessPipeline::from_config(config);
        self.pipeline = build.pipeline;
        build.ignored
    }

    /// Assemble a mosaic for `source` and run it through the effect chain
    ///
    /// Switches to the configured metric (recomputing tile descriptors if it
    /// differs from the active one), then runs constrained nearest-tile
    /// assignment with a fresh usage session. The call either returns a
    /// complete mosaic or fails before producing anything partial.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptySource`] for a zero-pixel source,
    /// [`MosaicError::NoTilesLoaded`] when the tile collection is empty, and
    /// [`MosaicError::InvalidParameter`] for out-of-range configuration.
    pub fn create_mosaic(
        &mut self,
        source: &RgbImage,
        config: &MosaicConfig,
        progress: Option<&BlockProgress>,
    ) -> Result<RgbImage> {
        if source.width() == 0 || source.height() == 0 {
            return Err(MosaicError::EmptySource);
        }
        if self.tiles.is_empty() {
            return Err(MosaicError::NoTilesLoaded);
        }
        config.validate()?;

        if config.metric != self.metric {
            self.set_metric_kind(config.metric);
        }

        let mut session = AssemblySession::new(self.tiles.len(), config.repeat_budget());
        let raw = assemble(
            source,
            &self.tiles,
            self.metric,
            config.grid_step,
            &mut session,
            progress,
        );
        Ok(self.pipeline.process(&raw, source))
    }
}
