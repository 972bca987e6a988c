//! PNG image format support

use crate::format::DecodedImage;
use crate::{IoError, IoResult};
use grisaille_core::{GrayImage, RgbImage};
use ::png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image.
///
/// Supports 8-bit grayscale, RGB, and RGBA (alpha is dropped).
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for other color types or bit
/// depths and [`IoError::DecodeError`] for malformed streams.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<DecodedImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {bit_depth:?}"
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    match color_type {
        ColorType::Grayscale => {
            let mut samples = Vec::with_capacity(width as usize * height as usize);
            for y in 0..height as usize {
                samples.extend_from_slice(&data[y * line_size..y * line_size + width as usize]);
            }
            Ok(DecodedImage::Gray(GrayImage::from_vec(
                width, height, 255, samples,
            )?))
        }
        ColorType::Rgb => {
            let row = width as usize * 3;
            let mut samples = Vec::with_capacity(row * height as usize);
            for y in 0..height as usize {
                samples.extend_from_slice(&data[y * line_size..y * line_size + row]);
            }
            Ok(DecodedImage::Rgb(RgbImage::from_vec(width, height, samples)?))
        }
        ColorType::Rgba => {
            let row = width as usize * 4;
            let mut samples = Vec::with_capacity(width as usize * height as usize * 3);
            for y in 0..height as usize {
                for px in data[y * line_size..y * line_size + row].chunks_exact(4) {
                    samples.extend_from_slice(&px[..3]);
                }
            }
            Ok(DecodedImage::Rgb(RgbImage::from_vec(width, height, samples)?))
        }
        _ => Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG color type: {color_type:?}"
        ))),
    }
}

/// Write a grayscale image as 8-bit grayscale PNG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the encoder fails.
pub fn write_png_gray<W: Write>(img: &GrayImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, img.width(), img.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
    png_writer
        .write_image_data(img.data())
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {e}")))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {e}")))?;
    Ok(())
}
