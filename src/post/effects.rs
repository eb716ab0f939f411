//! Visual effects for the post-process chain
//!
//! The effect set is closed, so effects are a tagged enum dispatched by
//! `match`. Every `apply` is pure: identical inputs produce identical
//! outputs, and no effect mutates shared state.

use crate::analysis::color::mean_color;
use crate::io::configuration::{
    CORRECTION_EPSILON, IDENTITY_THRESHOLD, SEAM_BLEND_WEIGHT,
};
use crate::math::blur::gaussian_blur;
use image::imageops::{FilterType, resize};
use image::{Rgb, RgbImage};
use ndarray::Array2;

/// One post-process effect with its configured strength
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Pull the mosaic's per-channel means toward the original's
    ColorCorrection {
        /// Correction strength in [0, 1]
        intensity: f64,
    },
    /// Linear blend between the mosaic and the resized original
    AlphaBlend {
        /// Blend weight of the original in [0, 1]
        alpha: f64,
    },
    /// Blur and re-blend only the pixels on grid seams
    SeamSmoothing {
        /// Smoothing strength in [0, 1]
        intensity: f64,
        /// Grid cell size locating the seams
        grid_size: u32,
    },
}

impl Effect {
    /// Instantiate an effect by its configuration name
    ///
    /// Unknown names yield `None`; callers drop them without failing, which
    /// is the designed behavior for stale or misspelled effect entries.
    pub fn from_name(name: &str, intensity: f64, grid_size: u32) -> Option<Self> {
        match name {
            "color_correction" => Some(Self::ColorCorrection { intensity }),
            "alpha_blend" => Some(Self::AlphaBlend { alpha: intensity }),
            "seam_smoothing" => Some(Self::SeamSmoothing {
                intensity,
                grid_size,
            }),
            _ => None,
        }
    }

    /// The configuration name of this effect
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ColorCorrection { .. } => "color_correction",
            Self::AlphaBlend { .. } => "alpha_blend",
            Self::SeamSmoothing { .. } => "seam_smoothing",
        }
    }

    /// Apply the effect, consuming the previous stage's output
    ///
    /// `original` is the source image prior to assembly; effects that need it
    /// resize their own local copy to the mosaic's dimensions.
    pub fn apply(&self, mosaic: &RgbImage, original: &RgbImage) -> RgbImage {
        match *self {
            Self::ColorCorrection { intensity } => color_correction(mosaic, original, intensity),
            Self::AlphaBlend { alpha } => alpha_blend(mosaic, original, alpha),
            Self::SeamSmoothing {
                intensity,
                grid_size,
            } => seam_smoothing(mosaic, intensity, grid_size),
        }
    }
}

// Matches the original's per-channel means by a damped multiplicative scale.
fn color_correction(mosaic: &RgbImage, original: &RgbImage, intensity: f64) -> RgbImage {
    if intensity <= IDENTITY_THRESHOLD {
        return mosaic.clone();
    }

    let resized = resize(original, mosaic.width(), mosaic.height(), FilterType::Triangle);
    let mosaic_mean = mean_color(mosaic);
    let original_mean = mean_color(&resized);

    let mut scales = [1.0f64; 3];
    for ((scale, original), mosaic) in scales.iter_mut().zip(original_mean).zip(mosaic_mean) {
        let ratio = original / (mosaic + CORRECTION_EPSILON);
        *scale = 1.0 + (ratio - 1.0) * intensity;
    }

    let mut corrected = mosaic.clone();
    for pixel in corrected.pixels_mut() {
        let [r, g, b] = pixel.0;
        *pixel = Rgb([
            (f64::from(r) * scales[0]).round().clamp(0.0, 255.0) as u8,
            (f64::from(g) * scales[1]).round().clamp(0.0, 255.0) as u8,
            (f64::from(b) * scales[2]).round().clamp(0.0, 255.0) as u8,
        ]);
    }
    corrected
}

fn blend_pixel(a: Rgb<u8>, b: Rgb<u8>, weight_b: f64) -> Rgb<u8> {
    let weight_a = 1.0 - weight_b;
    let [ar, ag, ab] = a.0;
    let [br, bg, bb] = b.0;
    Rgb([
        (weight_a * f64::from(ar) + weight_b * f64::from(br))
            .round()
            .clamp(0.0, 255.0) as u8,
        (weight_a * f64::from(ag) + weight_b * f64::from(bg))
            .round()
            .clamp(0.0, 255.0) as u8,
        (weight_a * f64::from(ab) + weight_b * f64::from(bb))
            .round()
            .clamp(0.0, 255.0) as u8,
    ])
}

// Weighted sum of the mosaic and the resized original.
fn alpha_blend(mosaic: &RgbImage, original: &RgbImage, alpha: f64) -> RgbImage {
    let resized = resize(original, mosaic.width(), mosaic.height(), FilterType::Triangle);
    let mut blended = mosaic.clone();
    for (x, y, pixel) in blended.enumerate_pixels_mut() {
        *pixel = blend_pixel(*pixel, *resized.get_pixel(x, y), alpha);
    }
    blended
}

/// Binary mask of the seam bands between grid cells
///
/// Bands of width `1 + floor(intensity * 2)` pixels are centered on every
/// positive multiple of `grid_size` along both axes and clamped to the image
/// bounds. A zero grid size or an intensity at or below the identity
/// threshold yields an all-false mask.
pub fn seam_mask(width: u32, height: u32, grid_size: u32, intensity: f64) -> Array2<bool> {
    let mut mask = Array2::from_elem((height as usize, width as usize), false);
    if grid_size == 0 || intensity <= IDENTITY_THRESHOLD {
        return mask;
    }

    let line_width = 1 + (intensity * 2.0) as u32;

    // Vertical seams
    let mut x = grid_size;
    while x < width {
        let start = x.saturating_sub(line_width / 2);
        let end = width.min(start + line_width);
        for column in start..end {
            for row in 0..height {
                if let Some(cell) = mask.get_mut([row as usize, column as usize]) {
                    *cell = true;
                }
            }
        }
        x += grid_size;
    }

    // Horizontal seams
    let mut y = grid_size;
    while y < height {
        let start = y.saturating_sub(line_width / 2);
        let end = height.min(start + line_width);
        for row in start..end {
            for column in 0..width {
                if let Some(cell) = mask.get_mut([row as usize, column as usize]) {
                    *cell = true;
                }
            }
        }
        y += grid_size;
    }

    mask
}

// Blurs the whole mosaic, then copies the blur-blended pixels back only
// inside the seam bands; everything off the seams is untouched.
fn seam_smoothing(mosaic: &RgbImage, intensity: f64, grid_size: u32) -> RgbImage {
    let (width, height) = mosaic.dimensions();
    let mask = seam_mask(width, height, grid_size, intensity);
    if !mask.iter().any(|&on_seam| on_seam) {
        return mosaic.clone();
    }

    let mut kernel_size = 3 + (intensity * 5.0) as u32;
    if kernel_size % 2 == 0 {
        kernel_size += 1;
    }
    kernel_size = kernel_size.min(width.min(height)).max(3);
    let sigma = intensity * 2.0;

    let blurred = gaussian_blur(mosaic, kernel_size, sigma);
    let blend_factor = intensity * SEAM_BLEND_WEIGHT;

    let mut smoothed = mosaic.clone();
    for (x, y, pixel) in smoothed.enumerate_pixels_mut() {
        let on_seam = mask
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(false);
        if on_seam {
            *pixel = blend_pixel(*pixel, *blurred.get_pixel(x, y), blend_factor);
        }
    }
    smoothed
}
