//! The color image container
//!
//! [`RgbImage`] holds interleaved 8-bit RGB samples. Color images enter
//! the workspace only as decode output; the processing exercises convert
//! them to grayscale ([`RgbImage::to_gray`]) or inspect their channel
//! distributions ([`RgbImage::channel_histograms`]).

use crate::error::{Error, Result};
use crate::gray::GrayImage;

/// Grayscale conversion weights.
const RED_WEIGHT: f32 = 0.3;
const GREEN_WEIGHT: f32 = 0.5;
const BLUE_WEIGHT: f32 = 0.2;

/// RGB channel histograms
///
/// Contains separate 256-bin histograms for red, green, and blue channels.
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    /// Red channel histogram (256 bins)
    pub red: Vec<u64>,
    /// Green channel histogram (256 bins)
    pub green: Vec<u64>,
    /// Blue channel histogram (256 bins)
    pub blue: Vec<u64>,
}

/// A dense 8-bit RGB image with interleaved samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Create a black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(RgbImage {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        })
    }

    /// Create an image from an interleaved RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for zero-sized grids and
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height * 3`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbImage {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw interleaved RGB buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get RGB values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some((self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set RGB values at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for coordinates outside the image.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
        Ok(())
    }

    /// Convert to grayscale using weighted luminance.
    ///
    /// Each output sample is `0.3*R + 0.5*G + 0.2*B`, rounded.
    pub fn to_gray(&self) -> GrayImage {
        let data: Vec<u8> = self
            .data
            .chunks_exact(3)
            .map(|px| {
                (RED_WEIGHT * f32::from(px[0])
                    + GREEN_WEIGHT * f32::from(px[1])
                    + BLUE_WEIGHT * f32::from(px[2])
                    + 0.5) as u8
            })
            .collect();
        GrayImage::from_raw(self.width, self.height, 255, data)
    }

    /// Compute per-channel histograms.
    pub fn channel_histograms(&self) -> ColorHistogram {
        let mut red = vec![0u64; 256];
        let mut green = vec![0u64; 256];
        let mut blue = vec![0u64; 256];
        for px in self.data.chunks_exact(3) {
            red[usize::from(px[0])] += 1;
            green[usize::from(px[1])] += 1;
            blue[usize::from(px[2])] += 1;
        }
        ColorHistogram { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_validates_length() {
        assert!(RgbImage::from_vec(2, 2, vec![0; 12]).is_ok());
        assert!(RgbImage::from_vec(2, 2, vec![0; 11]).is_err());
        assert!(RgbImage::from_vec(0, 2, vec![]).is_err());
    }

    #[test]
    fn test_get_set_rgb() {
        let mut img = RgbImage::new(2, 2).unwrap();
        img.set_rgb(1, 0, 10, 20, 30).unwrap();
        assert_eq!(img.get_rgb(1, 0), Some((10, 20, 30)));
        assert_eq!(img.get_rgb(2, 0), None);
        assert!(img.set_rgb(0, 2, 0, 0, 0).is_err());
    }

    #[test]
    fn test_to_gray_weights() {
        let img = RgbImage::from_vec(3, 1, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
        let gray = img.to_gray();
        assert_eq!(gray.max_val(), 255);
        // 0.3 / 0.5 / 0.2 of 255, rounded
        assert_eq!(gray.data(), &[77, 128, 51]);
    }

    #[test]
    fn test_to_gray_preserves_neutral() {
        let img = RgbImage::from_vec(1, 1, vec![100, 100, 100]).unwrap();
        assert_eq!(img.to_gray().data(), &[100]);
    }

    #[test]
    fn test_channel_histograms() {
        let img = RgbImage::from_vec(2, 1, vec![0, 128, 255, 0, 128, 255]).unwrap();
        let hist = img.channel_histograms();
        assert_eq!(hist.red[0], 2);
        assert_eq!(hist.green[128], 2);
        assert_eq!(hist.blue[255], 2);
        assert_eq!(hist.red.iter().sum::<u64>(), 2);
    }
}
