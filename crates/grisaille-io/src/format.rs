//! Image format detection and file-level dispatch
//!
//! Detects image formats by examining magic numbers in the file header
//! and routes reads to the format-specific decoders.

use crate::{IoError, IoResult};
use grisaille_core::{GrayImage, RgbImage};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// ASCII PNM formats
    pub const PBM_ASCII: &[u8] = b"P1";
    pub const PGM_ASCII: &[u8] = b"P2";
    pub const PPM_ASCII: &[u8] = b"P3";
}

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// ASCII portable bitmap (P1)
    Pbm,
    /// ASCII portable graymap (P2)
    Pgm,
    /// ASCII portable pixmap (P3)
    Ppm,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "pbm" => Some(ImageFormat::Pbm),
            "pgm" => Some(ImageFormat::Pgm),
            "ppm" | "pnm" => Some(ImageFormat::Ppm),
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// The canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Pbm => "pbm",
            ImageFormat::Pgm => "pgm",
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

/// A decoded image: grayscale or color depending on the source file.
#[derive(Debug, Clone)]
pub enum DecodedImage {
    /// Bilevel or grayscale image
    Gray(GrayImage),
    /// RGB color image
    Rgb(RgbImage),
}

impl DecodedImage {
    /// Collapse to grayscale, converting color images by weighted
    /// luminance.
    pub fn into_gray(self) -> GrayImage {
        match self {
            DecodedImage::Gray(img) => img,
            DecodedImage::Rgb(img) => img.to_gray(),
        }
    }
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.len() >= 3 && data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    match &data[..2] {
        m if m == magic::PBM_ASCII => Ok(ImageFormat::Pbm),
        m if m == magic::PGM_ASCII => Ok(ImageFormat::Pgm),
        m if m == magic::PPM_ASCII => Ok(ImageFormat::Ppm),
        _ => Err(IoError::UnsupportedFormat(
            "unknown image format".to_string(),
        )),
    }
}

/// Read an image from a file path, detecting the format from its magic
/// number.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut header = [0u8; 8];
    let bytes_read = reader.read(&mut header)?;
    let format = detect_format_from_bytes(&header[..bytes_read])?;
    reader.seek(SeekFrom::Start(0))?;

    match format {
        ImageFormat::Pbm | ImageFormat::Pgm | ImageFormat::Ppm => crate::pnm::read_pnm(reader),
        ImageFormat::Png => crate::png::read_png(reader),
        ImageFormat::Jpeg => crate::jpeg::read_jpeg(reader),
    }
}

/// Write a grayscale image to a file path in the given format.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for formats without a
/// grayscale encoder (PPM, JPEG).
pub fn write_gray_image<P: AsRef<Path>>(
    img: &GrayImage,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path)?;
    match format {
        ImageFormat::Pbm => crate::pnm::write_pbm(img, file),
        ImageFormat::Pgm => crate::pnm::write_pgm(img, file),
        ImageFormat::Png => crate::png::write_png_gray(img, file),
        ImageFormat::Ppm | ImageFormat::Jpeg => Err(IoError::UnsupportedFormat(format!(
            "no grayscale encoder for {format:?}"
        ))),
    }
}
