//! Algorithm constants and runtime configuration defaults

// Matching constants
/// Weight applied to the contrast term of the color+contrast metric
pub const STDDEV_WEIGHT: f64 = 2.0;
/// Scale that brings Bhattacharyya distances (0..1) into the same numeric
/// range as color distances
pub const HISTOGRAM_DISTANCE_SCALE: f64 = 1000.0;

// Post-processing constants
/// Guard against division by zero in per-channel color correction
pub const CORRECTION_EPSILON: f64 = 1e-5;
/// Intensities at or below this leave an effect's input unchanged
pub const IDENTITY_THRESHOLD: f64 = 0.01;
/// Portion of the blurred mosaic mixed into seam pixels at full intensity
pub const SEAM_BLEND_WEIGHT: f64 = 0.7;

// Default values for configurable parameters
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 30;
/// Default grid cell edge length in pixels
pub const DEFAULT_GRID_STEP: u32 = 30;
/// Default intensity for the color-correction effect
pub const DEFAULT_COLOR_CORRECTION_INTENSITY: f64 = 0.5;
/// Default intensity for the seam-smoothing effect
pub const DEFAULT_SEAM_SMOOTHING_INTENSITY: f64 = 0.7;
/// Default alpha for the blend-with-original effect
pub const DEFAULT_ALPHA_BLEND_INTENSITY: f64 = 0.5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
