//! Error types for grisaille-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Grisaille core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel value above the image's maximum intensity
    #[error("pixel value {value} exceeds maximum {max_val}")]
    PixelOutOfRange { value: u8, max_val: u8 },

    /// Sample buffer length does not match the declared dimensions
    #[error("data size mismatch: expected {expected} samples, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// Incompatible image sizes
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Incompatible maximum intensities
    #[error("incompatible intensity ranges: {0} vs {1}")]
    IncompatibleRanges(u8, u8),

    /// Coordinates outside the image
    #[error("index out of bounds: ({x}, {y}) in {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
