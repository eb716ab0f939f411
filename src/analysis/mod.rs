//! Per-image visual descriptors used by the matching metrics
//!
//! Every extractor is a pure function over a pixel buffer. Degenerate inputs
//! (empty images, or images too small for a 3x3 neighborhood) yield zero
//! descriptors rather than errors; the metrics treat those as incomparable.

use image::RgbImage;
use ndarray::Array2;

/// Mean color and per-channel contrast statistics
pub mod color;
/// Gradient-orientation histogram extraction
pub mod gradient;
/// Local-binary-pattern texture histogram extraction
pub mod texture;

/// Convert an RGB image to a floating-point luminance plane
///
/// Uses the Rec.601 weights (0.299, 0.587, 0.114) so grayscale conversion
/// matches the common imaging convention for RGB input.
pub fn luminance(image: &RgbImage) -> Array2<f32> {
    let (width, height) = image.dimensions();
    let mut plane = Array2::<f32>::zeros((height as usize, width as usize));
    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        if let Some(cell) = plane.get_mut([y as usize, x as usize]) {
            *cell = luma;
        }
    }
    plane
}
