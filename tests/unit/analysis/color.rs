//! Tests for mean color and standard deviation extraction

use image::{Rgb, RgbImage};
use mosaictile::analysis::color::{mean_color, std_dev};

#[test]
fn test_mean_color_flat_image() {
    let image = RgbImage::from_pixel(8, 8, Rgb([10, 200, 77]));
    let mean = mean_color(&image);
    assert_eq!(mean, [10.0, 200.0, 77.0]);
}

#[test]
fn test_mean_color_two_tone() {
    let image = RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
    });
    let mean = mean_color(&image);
    assert_eq!(mean, [127.5, 127.5, 127.5]);
}

#[test]
fn test_mean_color_empty_image() {
    let image = RgbImage::new(0, 0);
    assert_eq!(mean_color(&image), [0.0; 3]);
    assert_eq!(std_dev(&image), [0.0; 3]);
}

#[test]
fn test_std_dev_flat_image_is_zero() {
    let image = RgbImage::from_pixel(5, 5, Rgb([42, 42, 42]));
    assert_eq!(std_dev(&image), [0.0; 3]);
}

#[test]
fn test_std_dev_two_tone() {
    let image = RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
    });
    let deviation = std_dev(&image);
    for channel in deviation {
        assert!((channel - 127.5).abs() < 1e-9);
    }
}
