//! Grid partitioning and constrained nearest-tile assignment
//!
//! Selection is a linear scan of every eligible tile for every grid block:
//! O(blocks x tiles) distance evaluations, the dominant cost of mosaic
//! creation. Block and tile counts are bounded by interactive use, so the
//! quadratic shape is deliberate, and the scan stays sequential because each
//! block's choice must observe the usage recorded by earlier blocks.

use crate::engine::metric::{INCOMPARABLE, MetricKind};
use crate::engine::tiles::{Tile, TileFeatures};
use crate::io::progress::BlockProgress;
use image::imageops::{FilterType, crop_imm, replace, resize};
use image::{Rgb, RgbImage};

/// One rectangular region of the source grid
///
/// Interior blocks are `step` by `step`; blocks on the right and bottom edges
/// are clipped to the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBlock {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Clipped width in pixels
    pub width: u32,
    /// Clipped height in pixels
    pub height: u32,
}

/// Partition an image into row-major grid blocks of `step` pixels
///
/// Boundary blocks are clipped, never padded, and blocks never overlap.
/// A zero step yields no blocks.
pub fn grid_blocks(width: u32, height: u32, step: u32) -> Vec<GridBlock> {
    let mut blocks = Vec::new();
    if step == 0 {
        return blocks;
    }

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            blocks.push(GridBlock {
                x,
                y,
                width: step.min(width - x),
                height: step.min(height - y),
            });
            x += step;
        }
        y += step;
    }
    blocks
}

/// Per-mosaic usage ledger enforcing the tile reuse budget
///
/// Usage lives here rather than on the tiles themselves so one assembly pass
/// cannot leak counter state into the next, and so the ordering and tie-break
/// behavior of constrained assignment is testable in isolation. Counts are
/// monotonic within a session and can never exceed the budget: [`record`]
/// refuses increments past it.
///
/// [`record`]: AssemblySession::record
#[derive(Debug, Clone)]
pub struct AssemblySession {
    counts: Vec<u32>,
    budget: u32,
}

impl AssemblySession {
    /// Create a fresh session with all counters at zero
    pub fn new(tile_count: usize, budget: u32) -> Self {
        Self {
            counts: vec![0; tile_count],
            budget,
        }
    }

    /// Whether the tile at `index` still has budget left
    pub fn eligible(&self, index: usize) -> bool {
        self.counts.get(index).is_some_and(|&used| used < self.budget)
    }

    /// Count one use of the tile at `index`
    ///
    /// Ignored when the tile is out of budget or out of range, keeping the
    /// `usage <= budget` invariant structural.
    pub fn record(&mut self, index: usize) {
        if !self.eligible(index) {
            return;
        }
        if let Some(count) = self.counts.get_mut(index) {
            *count += 1;
        }
    }

    /// Times the tile at `index` has been used this session
    pub fn usage(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// The per-tile reuse budget this session enforces
    pub const fn budget(&self) -> u32 {
        self.budget
    }
}

/// Index of the eligible tile nearest to the cell, if any
///
/// The scan runs in tile insertion order and keeps the first strict minimum,
/// so ties resolve deterministically to the earliest-loaded tile. Tiles whose
/// descriptors are incomparable under the metric can never win: the search
/// starts from the incomparable distance and only accepts strictly smaller
/// values. Returns `None` when every tile is exhausted or incomparable.
pub fn select_tile(
    cell: &TileFeatures,
    tiles: &[Tile],
    metric: MetricKind,
    session: &AssemblySession,
) -> Option<usize> {
    let mut best_index = None;
    let mut best_distance = INCOMPARABLE;

    for (index, tile) in tiles.iter().enumerate() {
        if !session.eligible(index) {
            continue;
        }
        let distance = metric.distance(cell, &tile.features);
        if distance < best_distance {
            best_distance = distance;
            best_index = Some(index);
        }
    }
    best_index
}

/// Assemble the raw (pre-effects) mosaic for a source image
///
/// For every grid block: extract the block's features under the metric, pick
/// the nearest eligible tile, record its use, and blit it resized (cubic
/// interpolation) to the block's clipped dimensions. Blocks with no eligible
/// tile are filled with their own mean color, the designed degraded fallback.
pub fn assemble(
    source: &RgbImage,
    tiles: &[Tile],
    metric: MetricKind,
    grid_step: u32,
    session: &mut AssemblySession,
    progress: Option<&BlockProgress>,
) -> RgbImage {
    let (width, height) = source.dimensions();
    let mut mosaic = RgbImage::new(width, height);

    for block in grid_blocks(width, height, grid_step) {
        let region = crop_imm(source, block.x, block.y, block.width, block.height).to_image();
        let cell = metric.compute_features(&region);

        if let Some(index) = select_tile(&cell, tiles, metric, session) {
            session.record(index);
            if let Some(tile) = tiles.get(index) {
                let resized = resize(&tile.image, block.width, block.height, FilterType::CatmullRom);
                replace(&mut mosaic, &resized, i64::from(block.x), i64::from(block.y));
            }
        } else {
            fill_mean(&mut mosaic, block, &region);
        }

        if let Some(bar) = progress {
            bar.advance();
        }
    }
    mosaic
}

// Flat fill with the region's own mean color.
fn fill_mean(mosaic: &mut RgbImage, block: GridBlock, region: &RgbImage) {
    let mean = crate::analysis::color::mean_color(region);
    let pixel = Rgb([
        mean[0].round().clamp(0.0, 255.0) as u8,
        mean[1].round().clamp(0.0, 255.0) as u8,
        mean[2].round().clamp(0.0, 255.0) as u8,
    ]);
    for y in block.y..block.y + block.height {
        for x in block.x..block.x + block.width {
            mosaic.put_pixel(x, y, pixel);
        }
    }
}
