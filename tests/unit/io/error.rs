//! Tests for error display formatting and source chaining

use mosaictile::MosaicError;
use std::error::Error;
use std::path::PathBuf;

#[test]
fn test_no_tiles_loaded_display() {
    let err = MosaicError::NoTilesLoaded;
    assert!(err.to_string().contains("No tiles loaded"));
    assert!(err.source().is_none());
}

#[test]
fn test_empty_source_display() {
    let err = MosaicError::EmptySource;
    assert!(err.to_string().contains("no pixels"));
}

#[test]
fn test_tile_directory_chains_io_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = MosaicError::TileDirectory {
        path: PathBuf::from("/tiles"),
        source: io_err,
    };
    assert!(err.to_string().contains("/tiles"));
    assert!(err.source().is_some());
}

#[test]
fn test_invalid_parameter_display_includes_value_and_reason() {
    let err = MosaicError::InvalidParameter {
        parameter: "max_repeats",
        value: "0".to_string(),
        reason: "repeat budget must be positive when repeats are limited".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("max_repeats"));
    assert!(message.contains("'0'"));
    assert!(message.contains("positive"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = MosaicError::from(io_err);
    assert!(matches!(err, MosaicError::FileSystem { .. }));
    assert!(err.source().is_some());
}
