//! Input/output operations: errors, configuration, tile loading, and the CLI

/// Command-line interface and end-to-end run orchestration
pub mod cli;
/// Algorithm constants and configuration defaults
pub mod configuration;
/// Error types for mosaic operations
pub mod error;
/// Tile directory loading
pub mod library;
/// Assembly progress display
pub mod progress;
