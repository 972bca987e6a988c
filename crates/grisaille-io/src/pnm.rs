//! ASCII PNM (Portable Any Map) format support
//!
//! Reads and writes the plain-text netpbm variants:
//!
//! - `P1` - bitmap (bilevel, samples 0/1)
//! - `P2` - graymap (header-declared maximum up to 255)
//! - `P3` - pixmap (8-bit RGB)
//!
//! The binary variants (`P4`/`P5`/`P6`) and PAM (`P7`) are not
//! supported. `#` comments are accepted anywhere between tokens, and
//! `P1` raster digits may be packed without separators, both per the
//! netpbm grammar.

use crate::format::DecodedImage;
use crate::{IoError, IoResult};
use grisaille_core::{GrayImage, RgbImage};
use std::io::{BufRead, Write};

/// Whitespace-and-comment-aware scanner over raw PNM text.
struct TokenScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TokenScanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        TokenScanner { data, pos: 0 }
    }

    /// Advance past whitespace and `#`-to-end-of-line comments.
    fn skip_separators(&mut self) {
        while self.pos < self.data.len() {
            let b = self.data[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        if self.pos >= self.data.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.data.len()
            && !self.data[self.pos].is_ascii_whitespace()
            && self.data[self.pos] != b'#'
        {
            self.pos += 1;
        }
        Some(&self.data[start..self.pos])
    }

    /// Next unsigned decimal value.
    fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        let token = self
            .next_token()
            .ok_or_else(|| IoError::InvalidData(format!("missing {what}")))?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "invalid {what}: {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }

    /// Next single bitmap digit (`0` or `1`). Unlike general tokens,
    /// `P1` raster digits may be packed together ("0110").
    fn next_bit(&mut self) -> IoResult<u8> {
        self.skip_separators();
        match self.data.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(0)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(1)
            }
            Some(&b) => Err(IoError::InvalidData(format!(
                "invalid bitmap digit: {:?}",
                b as char
            ))),
            None => Err(IoError::InvalidData("truncated bitmap raster".to_string())),
        }
    }
}

/// Read an ASCII PNM image (P1/P2/P3) from a reader.
///
/// Returns a bilevel or grayscale [`GrayImage`] for P1/P2 and an
/// [`RgbImage`] for P3.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for other magics (including
/// the binary PNM variants) and [`IoError::InvalidData`] for malformed
/// headers or truncated rasters.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<DecodedImage> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let mut scanner = TokenScanner::new(&data);

    let magic = scanner
        .next_token()
        .ok_or_else(|| IoError::InvalidData("empty PNM input".to_string()))?;
    match magic {
        b"P1" => read_p1(&mut scanner).map(DecodedImage::Gray),
        b"P2" => read_p2(&mut scanner).map(DecodedImage::Gray),
        b"P3" => read_p3(&mut scanner).map(DecodedImage::Rgb),
        _ => Err(IoError::UnsupportedFormat(format!(
            "not an ASCII PNM magic: {:?}",
            String::from_utf8_lossy(magic)
        ))),
    }
}

fn read_dimensions(scanner: &mut TokenScanner<'_>) -> IoResult<(u32, u32)> {
    let width = scanner.next_u32("width")?;
    let height = scanner.next_u32("height")?;
    Ok((width, height))
}

fn read_p1(scanner: &mut TokenScanner<'_>) -> IoResult<GrayImage> {
    let (width, height) = read_dimensions(scanner)?;
    let count = width as usize * height as usize;
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        samples.push(scanner.next_bit()?);
    }
    Ok(GrayImage::from_vec(width, height, 1, samples)?)
}

fn read_p2(scanner: &mut TokenScanner<'_>) -> IoResult<GrayImage> {
    let (width, height) = read_dimensions(scanner)?;
    let max_val = scanner.next_u32("maxval")?;
    if max_val == 0 || max_val > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "graymap maxval {max_val} out of supported range 1..=255"
        )));
    }
    let count = width as usize * height as usize;
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let v = scanner.next_u32("graymap sample")?;
        if v > max_val {
            return Err(IoError::InvalidData(format!(
                "sample {v} exceeds declared maxval {max_val}"
            )));
        }
        samples.push(v as u8);
    }
    Ok(GrayImage::from_vec(width, height, max_val as u8, samples)?)
}

fn read_p3(scanner: &mut TokenScanner<'_>) -> IoResult<RgbImage> {
    let (width, height) = read_dimensions(scanner)?;
    let max_val = scanner.next_u32("maxval")?;
    if max_val != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "pixmap maxval {max_val} not supported (must be 255)"
        )));
    }
    let count = width as usize * height as usize * 3;
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let v = scanner.next_u32("pixmap sample")?;
        if v > 255 {
            return Err(IoError::InvalidData(format!(
                "sample {v} exceeds declared maxval 255"
            )));
        }
        samples.push(v as u8);
    }
    Ok(RgbImage::from_vec(width, height, samples)?)
}

/// Write a bilevel image as ASCII PBM (P1).
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the image is not bilevel
/// (`max_val != 1`).
pub fn write_pbm<W: Write>(img: &GrayImage, mut writer: W) -> IoResult<()> {
    if img.max_val() != 1 {
        return Err(IoError::EncodeError(format!(
            "bitmap output requires a bilevel image, got maxval {}",
            img.max_val()
        )));
    }
    write!(writer, "P1\n{} {}\n", img.width(), img.height())?;
    write_gray_rows(img, writer)
}

/// Write a grayscale image as ASCII PGM (P2).
pub fn write_pgm<W: Write>(img: &GrayImage, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P2\n{} {}\n{}\n",
        img.width(),
        img.height(),
        img.max_val()
    )?;
    write_gray_rows(img, writer)
}

fn write_gray_rows<W: Write>(img: &GrayImage, mut writer: W) -> IoResult<()> {
    for y in 0..img.height() {
        let mut sep = "";
        for &v in img.row(y) {
            write!(writer, "{sep}{v}")?;
            sep = " ";
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write a color image as ASCII PPM (P3).
pub fn write_ppm<W: Write>(img: &RgbImage, mut writer: W) -> IoResult<()> {
    write!(writer, "P3\n{} {}\n255\n", img.width(), img.height())?;
    let row_len = img.width() as usize * 3;
    for row in img.data().chunks_exact(row_len) {
        let mut sep = "";
        for &v in row {
            write!(writer, "{sep}{v}")?;
            sep = " ";
        }
        writeln!(writer)?;
    }
    Ok(())
}
