//! Tile records carrying precomputed visual descriptors

use image::RgbImage;
use ndarray::Array1;

/// Visual descriptors for one tile or grid cell
///
/// Only the fields relevant to the active metric are populated; the rest stay
/// `None`. Metrics treat a missing descriptor as incomparable (maximal
/// distance) instead of failing, so partially populated features never abort
/// a search.
#[derive(Debug, Clone, Default)]
pub struct TileFeatures {
    /// Mean color, one value per RGB channel
    pub mean_color: Option<[f64; 3]>,
    /// Per-channel standard deviation (contrast)
    pub stddev: Option<[f64; 3]>,
    /// 36-bin gradient-orientation histogram, L1-normalized when populated
    pub gradient_hist: Option<Array1<f32>>,
    /// 256-bin LBP texture histogram, L1-normalized when populated
    pub texture_hist: Option<Array1<f32>>,
}

/// A normalized candidate image used to replace grid cells of the source
#[derive(Debug, Clone)]
pub struct Tile {
    /// Pixel buffer, exactly `tile_size` by `tile_size`
    pub image: RgbImage,
    /// Descriptors under the metric that was active at load/recompute time
    pub features: TileFeatures,
    /// Rotation applied at load time, in degrees (0 when rotation is off)
    pub angle: f32,
    /// Groups tiles cut from the same source file
    pub original_index: usize,
}
