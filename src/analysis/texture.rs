//! Local-binary-pattern texture descriptor

use crate::analysis::luminance;
use crate::math::histogram::normalize_l1;
use image::RgbImage;
use ndarray::{Array1, Array2};

/// Number of texture bins, one per 8-bit LBP code
pub const TEXTURE_BINS: usize = 256;

// Clockwise neighbor offsets starting at top-left; the first entry maps to
// the most significant bit of the code, the last to the least significant.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

fn lbp_code(plane: &Array2<f32>, row: usize, col: usize) -> u8 {
    let center = plane.get([row, col]).copied().unwrap_or(0.0);
    let mut code = 0u8;
    for (bit, (dr, dc)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        let neighbor_row = (row as i64 + dr) as usize;
        let neighbor_col = (col as i64 + dc) as usize;
        let neighbor = plane
            .get([neighbor_row, neighbor_col])
            .copied()
            .unwrap_or(0.0);
        if neighbor > center {
            code |= 1 << (7 - bit);
        }
    }
    code
}

/// Histogram of local-binary-pattern codes over all interior pixels
///
/// Each interior pixel (the 1-pixel border is excluded) is compared against
/// its 8 neighbors in clockwise order starting at the top-left; neighbors
/// brighter than the center set their bit. The 256-bin code histogram is
/// L1-normalized to sum to one. Images smaller than 3x3 in either dimension
/// yield an all-zero histogram.
pub fn lbp_histogram(image: &RgbImage) -> Array1<f32> {
    let mut hist = Array1::<f32>::zeros(TEXTURE_BINS);
    if image.width() < 3 || image.height() < 3 {
        return hist;
    }

    let plane = luminance(image);
    let (rows, cols) = plane.dim();
    for row in 1..rows - 1 {
        for col in 1..cols - 1 {
            let code = lbp_code(&plane, row, col) as usize;
            if let Some(cell) = hist.get_mut(code) {
                *cell += 1.0;
            }
        }
    }

    normalize_l1(&mut hist);
    hist
}
