//! Separable Gaussian blur parameterized by explicit kernel size and sigma
//!
//! The seam-smoothing effect derives both the kernel size and sigma from its
//! intensity, so the blur must expose both knobs. Samples outside the image
//! are clamped to the nearest edge pixel.

use image::{Rgb, RgbImage};

// Normalized 1-D Gaussian taps. A non-positive sigma falls back to the
// conventional 0.3 * ((size - 1) * 0.5 - 1) + 0.8 rule.
fn kernel(size: u32, sigma: f64) -> Vec<f64> {
    let size = size.max(1) | 1;
    let radius = i64::from(size / 2);
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * (f64::from(size - 1) * 0.5 - 1.0) + 0.8
    };
    let denominator = 2.0 * sigma * sigma;

    let mut taps: Vec<f64> = (-radius..=radius)
        .map(|offset| (-((offset * offset) as f64) / denominator).exp())
        .collect();
    let total: f64 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= total;
    }
    taps
}

/// Blur an image with a separable Gaussian of the given kernel size and sigma
///
/// `kernel_size` is forced odd (and at least 1); empty images pass through
/// unchanged. Channel accumulation happens in `f64` and is rounded back to
/// 8-bit on output.
pub fn gaussian_blur(image: &RgbImage, kernel_size: u32, sigma: f64) -> RgbImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    let taps = kernel(kernel_size, sigma);
    let radius = (taps.len() / 2) as i64;

    // Horizontal pass into a float plane, row-major.
    let mut horizontal = vec![[0.0f64; 3]; (width * height) as usize];
    for (index, sample) in horizontal.iter_mut().enumerate() {
        let x = index as u32 % width;
        let y = index as u32 / width;
        let mut acc = [0.0f64; 3];
        for (k, tap) in taps.iter().enumerate() {
            let sx = (i64::from(x) + k as i64 - radius).clamp(0, i64::from(width) - 1) as u32;
            let [r, g, b] = image.get_pixel(sx, y).0;
            acc[0] += tap * f64::from(r);
            acc[1] += tap * f64::from(g);
            acc[2] += tap * f64::from(b);
        }
        *sample = acc;
    }

    // Vertical pass back to 8-bit.
    let mut output = RgbImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let mut acc = [0.0f64; 3];
        for (k, tap) in taps.iter().enumerate() {
            let sy = (i64::from(y) + k as i64 - radius).clamp(0, i64::from(height) - 1) as u32;
            let sample = horizontal
                .get((sy * width + x) as usize)
                .copied()
                .unwrap_or_default();
            acc[0] += tap * sample[0];
            acc[1] += tap * sample[1];
            acc[2] += tap * sample[2];
        }
        *pixel = Rgb([
            acc[0].round().clamp(0.0, 255.0) as u8,
            acc[1].round().clamp(0.0, 255.0) as u8,
            acc[2].round().clamp(0.0, 255.0) as u8,
        ]);
    }
    output
}
