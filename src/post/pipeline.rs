//! Effect chain construction from a post-process configuration

use crate::post::effects::Effect;
use image::RgbImage;

/// Ordered post-process configuration
///
/// The entry order is the application order. Unknown effect names are kept
/// here verbatim; they are dropped (and reported) when the pipeline is built.
#[derive(Debug, Clone)]
pub struct PostProcessConfig {
    /// (effect name, intensity in [0, 1]) pairs in application order
    pub effects: Vec<(String, f64)>,
    /// Grid cell size injected into grid-aware effects
    pub grid_size: u32,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            effects: Vec::new(),
            grid_size: crate::io::configuration::DEFAULT_GRID_STEP,
        }
    }
}

impl PostProcessConfig {
    /// Append an effect to the end of the chain
    pub fn add_effect(&mut self, name: &str, intensity: f64) {
        self.effects.push((name.to_string(), intensity));
    }

    /// Remove all configured effects
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }
}

/// Result of building a pipeline from a configuration
#[derive(Debug)]
pub struct PipelineBuild {
    /// The constructed effect chain
    pub pipeline: PostProcessPipeline,
    /// Effect names that matched no known effect and were dropped
    pub ignored: Vec<String>,
}

/// An ordered chain of instantiated effects
#[derive(Debug, Clone, Default)]
pub struct PostProcessPipeline {
    effects: Vec<Effect>,
}

impl PostProcessPipeline {
    /// Build the chain from a configuration
    ///
    /// Effects are instantiated in configuration order; the grid size is
    /// injected into every grid-aware effect. Unknown names never fail the
    /// build, they are collected in the returned report instead.
    pub fn from_config(config: &PostProcessConfig) -> PipelineBuild {
        let mut effects = Vec::new();
        let mut ignored = Vec::new();
        for (name, intensity) in &config.effects {
            match Effect::from_name(name, *intensity, config.grid_size) {
                Some(effect) => effects.push(effect),
                None => ignored.push(name.clone()),
            }
        }
        PipelineBuild {
            pipeline: Self { effects },
            ignored,
        }
    }

    /// Apply the whole chain to an assembled mosaic
    ///
    /// Each effect consumes the previous effect's output together with the
    /// original source image. An empty chain returns a plain copy.
    pub fn process(&self, mosaic: &RgbImage, original: &RgbImage) -> RgbImage {
        let mut result = mosaic.clone();
        for effect in &self.effects {
            result = effect.apply(&result, original);
        }
        result
    }

    /// The instantiated effects in application order
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}
