//! Error types for map and config loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when decoding a map image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Map file could not be found.
    #[error("Map file not found: {0}")]
    FileNotFound(PathBuf),

    /// Map file exists but could not be read or decoded.
    #[error("Failed to decode map '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Map image has no pixels.
    #[error("Map image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// A grid read outside the decoded dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
pub struct BoundsError {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
}

/// Errors that can occur when loading the RON config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read config '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },
}
