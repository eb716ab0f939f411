//! Gradient-orientation histogram, a HOG-style edge-direction descriptor

use crate::analysis::luminance;
use crate::math::histogram::normalize_l1;
use image::RgbImage;
use ndarray::{Array1, Array2};

/// Number of orientation bins, each covering 10 degrees
pub const ORIENTATION_BINS: usize = 36;

// Edge-replicated sample from a luminance plane.
fn sample(plane: &Array2<f32>, row: i64, col: i64) -> f32 {
    let (rows, cols) = plane.dim();
    let row = row.clamp(0, rows as i64 - 1) as usize;
    let col = col.clamp(0, cols as i64 - 1) as usize;
    plane.get([row, col]).copied().unwrap_or(0.0)
}

/// Histogram of gradient orientations weighted by gradient magnitude
///
/// Gradients come from a 3x3 Sobel operator over the luminance plane with
/// replicated borders. Each pixel's magnitude is accumulated into one of 36
/// bins of 10 degrees, and the histogram is L1-normalized to sum to one.
/// Images smaller than 3x3 in either dimension yield an all-zero histogram.
pub fn gradient_histogram(image: &RgbImage) -> Array1<f32> {
    let mut hist = Array1::<f32>::zeros(ORIENTATION_BINS);
    if image.width() < 3 || image.height() < 3 {
        return hist;
    }

    let plane = luminance(image);
    let (rows, cols) = plane.dim();
    let bin_width = 360.0 / ORIENTATION_BINS as f32;

    for row in 0..rows as i64 {
        for col in 0..cols as i64 {
            let gx = sample(&plane, row - 1, col + 1) - sample(&plane, row - 1, col - 1)
                + 2.0 * (sample(&plane, row, col + 1) - sample(&plane, row, col - 1))
                + sample(&plane, row + 1, col + 1)
                - sample(&plane, row + 1, col - 1);
            let gy = sample(&plane, row + 1, col - 1) - sample(&plane, row - 1, col - 1)
                + 2.0 * (sample(&plane, row + 1, col) - sample(&plane, row - 1, col))
                + sample(&plane, row + 1, col + 1)
                - sample(&plane, row - 1, col + 1);

            let magnitude = gx.hypot(gy);
            let mut angle = gy.atan2(gx).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }

            let bin = ((angle / bin_width) as usize).min(ORIENTATION_BINS - 1);
            if let Some(cell) = hist.get_mut(bin) {
                *cell += magnitude;
            }
        }
    }

    normalize_l1(&mut hist);
    hist
}
