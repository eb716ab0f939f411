//! Tile directory loading
//!
//! Every regular file in the directory is decoded, normalized to the tile
//! size, optionally rotated, and measured under the active metric. Files that
//! fail to decode are skipped without aborting the load; the skipped paths
//! are reported so callers (and tests) can see what was dropped.

use crate::engine::metric::MetricKind;
use crate::engine::tiles::Tile;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::imageops::{FilterType, resize};
use image::Rgb;
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};
use std::path::{Path, PathBuf};

/// Result of loading a tile directory
#[derive(Debug)]
pub struct LoadOutcome {
    /// One tile per decodable file, in sorted path order
    pub tiles: Vec<Tile>,
    /// Files that could not be decoded as images
    pub skipped: Vec<PathBuf>,
}

/// Summary of a completed load, without the tiles themselves
#[derive(Debug)]
pub struct LoadReport {
    /// Number of tiles that loaded successfully
    pub loaded: usize,
    /// Files that could not be decoded as images
    pub skipped: Vec<PathBuf>,
}

/// Load every decodable image in `folder` as a normalized tile
///
/// Tiles are produced in sorted path order so that tile insertion order, and
/// with it nearest-tile tie-breaking, is deterministic across runs. Exactly
/// one tile is produced per source file; `original_index` increments once per
/// decoded file. When rotation is enabled the tile is rotated about its
/// center by `rotation_angle` degrees (counterclockwise, black border fill).
///
/// # Errors
///
/// Returns an error if `tile_size` is zero or the directory itself cannot be
/// read. An undecodable file is not an error: it lands in
/// [`LoadOutcome::skipped`]. A directory with zero decodable files yields an
/// empty tile list, which the engine rejects at assembly time.
pub fn load_tiles(
    folder: &Path,
    tile_size: u32,
    rotation_enabled: bool,
    rotation_angle: f32,
    metric: MetricKind,
) -> Result<LoadOutcome> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tile size must be positive",
        ));
    }

    let mut paths = Vec::new();
    let entries = std::fs::read_dir(folder).map_err(|source| MosaicError::TileDirectory {
        path: folder.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| MosaicError::TileDirectory {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let angle = if rotation_enabled { rotation_angle } else { 0.0 };
    let mut tiles = Vec::new();
    let mut skipped = Vec::new();
    let mut original_index = 0;

    for path in paths {
        let Ok(decoded) = image::open(&path) else {
            skipped.push(path);
            continue;
        };

        let resized = resize(&decoded.to_rgb8(), tile_size, tile_size, FilterType::Triangle);
        let rotated = if angle.rem_euclid(360.0) == 0.0 {
            resized
        } else {
            // Negated because positive angles mean counterclockwise here,
            // while rotate_about_center turns clockwise for positive theta.
            rotate_about_center(
                &resized,
                -angle.to_radians(),
                Interpolation::Bilinear,
                Rgb([0, 0, 0]),
            )
        };

        let features = metric.compute_features(&rotated);
        tiles.push(Tile {
            image: rotated,
            features,
            angle,
            original_index,
        });
        original_index += 1;
    }

    Ok(LoadOutcome { tiles, skipped })
}
