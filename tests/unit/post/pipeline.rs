//! Tests for effect chain construction and application order

use image::{Rgb, RgbImage};
use mosaictile::post::{Effect, PostProcessConfig, PostProcessPipeline};

#[test]
fn test_from_config_preserves_order() {
    let mut config = PostProcessConfig::default();
    config.add_effect("seam_smoothing", 0.7);
    config.add_effect("color_correction", 0.5);
    config.add_effect("alpha_blend", 0.3);

    let build = PostProcessPipeline::from_config(&config);
    assert!(build.ignored.is_empty());

    let names: Vec<&str> = build
        .pipeline
        .effects()
        .iter()
        .map(Effect::name)
        .collect();
    assert_eq!(names, vec!["seam_smoothing", "color_correction", "alpha_blend"]);
}

#[test]
fn test_from_config_collects_unknown_names() {
    let mut config = PostProcessConfig::default();
    config.add_effect("alpha_blend", 0.5);
    config.add_effect("sharpen", 0.5);
    config.add_effect("vignette", 0.2);

    let build = PostProcessPipeline::from_config(&config);
    assert_eq!(build.pipeline.effects().len(), 1);
    assert_eq!(
        build.ignored,
        vec!["sharpen".to_string(), "vignette".to_string()]
    );
}

#[test]
fn test_grid_size_injected_into_grid_aware_effects() {
    let mut config = PostProcessConfig {
        grid_size: 12,
        ..PostProcessConfig::default()
    };
    config.add_effect("seam_smoothing", 0.7);

    let build = PostProcessPipeline::from_config(&config);
    assert_eq!(
        build.pipeline.effects().first(),
        Some(&Effect::SeamSmoothing {
            intensity: 0.7,
            grid_size: 12,
        })
    );
}

#[test]
fn test_empty_chain_returns_plain_copy() {
    let pipeline = PostProcessPipeline::default();
    let mosaic = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    let original = RgbImage::from_pixel(4, 4, Rgb([200, 200, 200]));
    assert_eq!(pipeline.process(&mosaic, &original), mosaic);
}

#[test]
fn test_chain_composes_effects() {
    // A full alpha blend followed by a zero blend must end on the mosaic,
    // proving each stage consumes the previous stage's output.
    let mut config = PostProcessConfig::default();
    config.add_effect("alpha_blend", 1.0);
    config.add_effect("alpha_blend", 0.0);

    let build = PostProcessPipeline::from_config(&config);
    let mosaic = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    let original = RgbImage::from_pixel(4, 4, Rgb([200, 100, 50]));

    let first = Effect::AlphaBlend { alpha: 1.0 }.apply(&mosaic, &original);
    assert_eq!(build.pipeline.process(&mosaic, &original), first);
}

#[test]
fn test_clear_effects_empties_configuration() {
    let mut config = PostProcessConfig::default();
    config.add_effect("alpha_blend", 0.5);
    config.clear_effects();
    assert!(config.effects.is_empty());

    let build = PostProcessPipeline::from_config(&config);
    assert!(build.pipeline.effects().is_empty());
}
