//! Tests for individual post-process effects

use image::{Rgb, RgbImage};
use mosaictile::post::Effect;
use mosaictile::post::effects::seam_mask;

fn flat(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

#[test]
fn test_seam_mask_band_geometry() {
    // Full intensity gives a band of width 3 centered on each grid multiple
    let mask = seam_mask(10, 10, 5, 1.0);

    for column in 0..10usize {
        let on_seam = (4..=6).contains(&column);
        assert_eq!(*mask.get([0, column]).unwrap(), on_seam, "column {column}");
    }
    // Horizontal band covers rows 4..=6 across the full width
    for row in 4..=6usize {
        assert!(*mask.get([row, 0]).unwrap());
        assert!(*mask.get([row, 9]).unwrap());
    }
    assert!(!*mask.get([0, 0]).unwrap());
    assert!(!*mask.get([9, 9]).unwrap());
}

#[test]
fn test_seam_mask_zero_grid_is_empty() {
    let mask = seam_mask(10, 10, 0, 1.0);
    assert!(!mask.iter().any(|&cell| cell));
}

#[test]
fn test_seam_mask_below_identity_threshold_is_empty() {
    let mask = seam_mask(10, 10, 5, 0.009);
    assert!(!mask.iter().any(|&cell| cell));
}

#[test]
fn test_seam_mask_grid_larger_than_image_is_empty() {
    let mask = seam_mask(8, 8, 20, 1.0);
    assert!(!mask.iter().any(|&cell| cell));
}

#[test]
fn test_color_correction_zero_intensity_is_identity() {
    let mosaic = flat(8, 8, [100, 100, 100]);
    let original = flat(8, 8, [200, 200, 200]);
    let effect = Effect::ColorCorrection { intensity: 0.0 };
    assert_eq!(effect.apply(&mosaic, &original), mosaic);
}

#[test]
fn test_color_correction_full_intensity_matches_original_mean() {
    let mosaic = flat(8, 8, [100, 100, 100]);
    let original = flat(8, 8, [200, 200, 200]);
    let effect = Effect::ColorCorrection { intensity: 1.0 };
    let corrected = effect.apply(&mosaic, &original);

    let pixel = corrected.get_pixel(0, 0).0;
    for channel in pixel {
        assert!((199..=201).contains(&channel), "channel {channel}");
    }
}

#[test]
fn test_color_correction_half_intensity_moves_halfway() {
    let mosaic = flat(8, 8, [100, 100, 100]);
    let original = flat(8, 8, [200, 200, 200]);
    let effect = Effect::ColorCorrection { intensity: 0.5 };
    let corrected = effect.apply(&mosaic, &original);

    // Damped scale 1 + (2 - 1) * 0.5 = 1.5, so 100 maps near 150
    let pixel = corrected.get_pixel(0, 0).0;
    for channel in pixel {
        assert!((149..=151).contains(&channel), "channel {channel}");
    }
}

#[test]
fn test_alpha_blend_zero_keeps_mosaic() {
    let mosaic = flat(8, 8, [10, 20, 30]);
    let original = flat(8, 8, [200, 200, 200]);
    let effect = Effect::AlphaBlend { alpha: 0.0 };
    assert_eq!(effect.apply(&mosaic, &original), mosaic);
}

#[test]
fn test_alpha_blend_one_replaces_with_original() {
    let mosaic = flat(8, 8, [10, 20, 30]);
    let original = flat(8, 8, [200, 100, 50]);
    let effect = Effect::AlphaBlend { alpha: 1.0 };
    assert_eq!(effect.apply(&mosaic, &original), original);
}

#[test]
fn test_alpha_blend_resizes_original_to_mosaic_dimensions() {
    let mosaic = flat(8, 8, [0, 0, 0]);
    let original = flat(16, 16, [200, 200, 200]);
    let effect = Effect::AlphaBlend { alpha: 0.5 };
    let blended = effect.apply(&mosaic, &original);
    assert_eq!(blended.dimensions(), (8, 8));
    assert_eq!(blended.get_pixel(0, 0).0, [100, 100, 100]);
}

#[test]
fn test_seam_smoothing_zero_grid_is_identity() {
    let mosaic = flat(12, 12, [50, 100, 150]);
    let effect = Effect::SeamSmoothing {
        intensity: 1.0,
        grid_size: 0,
    };
    assert_eq!(effect.apply(&mosaic, &mosaic), mosaic);
}

#[test]
fn test_seam_smoothing_touches_only_seam_pixels() {
    // Two-tone image with a hard seam at x = 6
    let mut mosaic = RgbImage::from_pixel(12, 12, Rgb([0, 0, 0]));
    for y in 0..12 {
        for x in 6..12 {
            mosaic.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    let effect = Effect::SeamSmoothing {
        intensity: 1.0,
        grid_size: 6,
    };
    let smoothed = effect.apply(&mosaic, &mosaic);

    // Corners sit off the seam bands and keep their exact values
    assert_eq!(smoothed.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(smoothed.get_pixel(11, 0).0, [255, 255, 255]);
    // Pixels straddling the vertical seam pull toward each other
    assert!(smoothed.get_pixel(5, 0).0[0] > 0);
    assert!(smoothed.get_pixel(6, 0).0[0] < 255);
}

#[test]
fn test_effect_from_name_round_trip() {
    for name in ["color_correction", "alpha_blend", "seam_smoothing"] {
        let effect = Effect::from_name(name, 0.5, 30).unwrap();
        assert_eq!(effect.name(), name);
    }
}

#[test]
fn test_effect_from_name_unknown() {
    assert!(Effect::from_name("vignette", 0.5, 30).is_none());
    assert!(Effect::from_name("", 0.5, 30).is_none());
}
