//! Error types for grisaille-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grisaille_core::Error),

    /// Zero-sized or otherwise malformed input grid
    #[error("invalid shape: {width}x{height}")]
    InvalidShape {
        /// Input width in pixels
        width: u32,
        /// Input height in pixels
        height: u32,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
