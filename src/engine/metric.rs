//! Interchangeable cell/tile comparison strategies
//!
//! The metric set is closed and small, so strategies are a tagged enum
//! dispatched by `match` rather than trait objects behind a factory. Each
//! variant pairs a feature-extraction recipe with a distance over two feature
//! sets; histogram distances are scaled into the same numeric range as the
//! color distances so thresholding behaves comparably across metrics.

use crate::analysis::color::{mean_color, std_dev};
use crate::analysis::gradient::gradient_histogram;
use crate::analysis::texture::lbp_histogram;
use crate::engine::tiles::TileFeatures;
use crate::io::configuration::{HISTOGRAM_DISTANCE_SCALE, STDDEV_WEIGHT};
use crate::math::histogram::bhattacharyya;
use image::RgbImage;
use ndarray::Array1;

/// Distance reported when either side of a comparison lacks the descriptors
/// the metric needs; such candidates lose every comparison
pub const INCOMPARABLE: f64 = f64::MAX;

/// The available comparison strategies, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    /// Euclidean distance between mean colors
    #[default]
    Color,
    /// Mean-color distance plus weighted contrast distance
    ColorContrast,
    /// Bhattacharyya distance between gradient-orientation histograms
    Gradient,
    /// Bhattacharyya distance between LBP texture histograms
    Texture,
}

impl MetricKind {
    /// Look up a metric by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "color" => Some(Self::Color),
            "color_contrast" => Some(Self::ColorContrast),
            "gradient" => Some(Self::Gradient),
            "texture" => Some(Self::Texture),
            _ => None,
        }
    }

    /// The configuration name of this metric
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::ColorContrast => "color_contrast",
            Self::Gradient => "gradient",
            Self::Texture => "texture",
        }
    }

    /// Extract the descriptors this metric compares
    ///
    /// Used identically for grid cells and tiles; fields other metrics would
    /// need are left `None`.
    pub fn compute_features(self, image: &RgbImage) -> TileFeatures {
        match self {
            Self::Color => TileFeatures {
                mean_color: Some(mean_color(image)),
                ..TileFeatures::default()
            },
            Self::ColorContrast => TileFeatures {
                mean_color: Some(mean_color(image)),
                stddev: Some(std_dev(image)),
                ..TileFeatures::default()
            },
            Self::Gradient => TileFeatures {
                gradient_hist: Some(gradient_histogram(image)),
                ..TileFeatures::default()
            },
            Self::Texture => TileFeatures {
                texture_hist: Some(lbp_histogram(image)),
                ..TileFeatures::default()
            },
        }
    }

    /// Distance between a cell's and a tile's descriptors
    ///
    /// Never panics: missing or mismatched descriptors yield
    /// [`INCOMPARABLE`], the designed fallback that makes the candidate lose
    /// every comparison.
    pub fn distance(self, cell: &TileFeatures, tile: &TileFeatures) -> f64 {
        match self {
            Self::Color => match (&cell.mean_color, &tile.mean_color) {
                (Some(a), Some(b)) => euclidean(a, b),
                _ => INCOMPARABLE,
            },
            Self::ColorContrast => match (
                &cell.mean_color,
                &tile.mean_color,
                &cell.stddev,
                &tile.stddev,
            ) {
                (Some(ca), Some(cb), Some(sa), Some(sb)) => {
                    euclidean(ca, cb) + STDDEV_WEIGHT * euclidean(sa, sb)
                }
                _ => INCOMPARABLE,
            },
            Self::Gradient => histogram_distance(&cell.gradient_hist, &tile.gradient_hist),
            Self::Texture => histogram_distance(&cell.texture_hist, &tile.texture_hist),
        }
    }
}

fn euclidean(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

// Scaled Bhattacharyya over optional histograms; the incomparable sentinel
// must not be scaled or it would overflow to infinity.
fn histogram_distance(cell: &Option<Array1<f32>>, tile: &Option<Array1<f32>>) -> f64 {
    let (Some(a), Some(b)) = (cell, tile) else {
        return INCOMPARABLE;
    };
    let distance = bhattacharyya(a, b);
    if distance >= INCOMPARABLE {
        INCOMPARABLE
    } else {
        distance * HISTOGRAM_DISTANCE_SCALE
    }
}
