//! Mosaic engine: tile records, metrics, assembly, and orchestration
//!
//! This module contains the matching pipeline:
//! - Tile records with precomputed descriptors
//! - Interchangeable comparison metrics
//! - Constrained nearest-tile assignment over a grid
//! - The engine that owns tiles and configuration

/// Grid partitioning and constrained nearest-tile assignment
pub mod assembly;
/// Engine orchestration and mosaic configuration
pub mod generator;
/// Interchangeable cell/tile comparison strategies
pub mod metric;
/// Tile records and their visual descriptors
pub mod tiles;

pub use generator::{MosaicConfig, MosaicEngine};
pub use metric::MetricKind;
