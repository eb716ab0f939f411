//! Photomosaic assembly engine with interchangeable matching metrics
//!
//! The system cuts a source image into grid cells, replaces each cell with the
//! visually closest tile from a loaded library under a per-tile reuse budget,
//! and blends the assembled mosaic with the original through an ordered chain
//! of post-processing effects.

#![forbid(unsafe_code)]

/// Per-image feature extraction: color statistics and histogram descriptors
pub mod analysis;
/// Tile records, comparison metrics, and the constrained assembly algorithm
pub mod engine;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Histogram mathematics and convolution utilities
pub mod math;
/// Post-processing effects applied to the assembled mosaic
pub mod post;

pub use io::error::{MosaicError, Result};
