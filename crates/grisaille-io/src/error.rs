//! Error types for grisaille-io
//!
//! Every codec in this crate (the hand-written PNM scanner as well as
//! the `png` and `jpeg-decoder` backends) reports failures through the
//! single [`IoError`] type, so callers handle one error surface for all
//! formats.

use thiserror::Error;

/// Error type for image decoding and encoding.
#[derive(Error, Debug)]
pub enum IoError {
    /// Failure in the underlying reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A recognized file that this crate cannot handle (binary PNM,
    /// 16-bit PNG, CMYK JPEG, ...) or an unrecognized magic number
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Structurally invalid image data (bad header token, truncated
    /// raster, sample above the declared maximum)
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A decoding backend rejected the stream
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An encoding backend failed to produce output
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Container construction failed for the decoded samples
    #[error("core error: {0}")]
    Core(#[from] grisaille_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
