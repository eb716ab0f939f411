//! Mathematical utilities shared by the extractors and effects

/// Separable Gaussian blur with explicit kernel geometry
pub mod blur;
/// Histogram normalization and comparison
pub mod histogram;
