//! JPEG image format support
//!
//! Decode only; none of the exercises write JPEG output.

use crate::format::DecodedImage;
use crate::{IoError, IoResult};
use grisaille_core::{GrayImage, RgbImage};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image.
///
/// Supports 8-bit grayscale (L8) and RGB (RGB24) streams.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for other pixel formats and
/// [`IoError::DecodeError`] for malformed streams.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<DecodedImage> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG metadata".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    match info.pixel_format {
        PixelFormat::L8 => Ok(DecodedImage::Gray(GrayImage::from_vec(
            width, height, 255, pixels,
        )?)),
        PixelFormat::RGB24 => Ok(DecodedImage::Rgb(RgbImage::from_vec(width, height, pixels)?)),
        other => Err(IoError::UnsupportedFormat(format!(
            "unsupported JPEG pixel format: {other:?}"
        ))),
    }
}
