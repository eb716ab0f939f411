//! Post-processing applied to the assembled mosaic
//!
//! Effects are independent: each consumes the previous effect's output plus
//! the original source image and returns a new buffer. The pipeline applies
//! them in configuration order.

/// The individual visual effects
pub mod effects;
/// Effect chain construction and application
pub mod pipeline;

pub use effects::Effect;
pub use pipeline::{PostProcessConfig, PostProcessPipeline};
