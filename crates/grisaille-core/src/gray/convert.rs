//! Bit-depth reduction and binarization
//!
//! Conversions that reduce the information content of a grayscale image:
//!
//! - `reduce_depth` quantizes an 8-bit image to a smaller number of
//!   significant bits
//! - `threshold_to_binary` produces a bilevel image from a threshold

use super::GrayImage;
use crate::error::{Error, Result};

impl GrayImage {
    /// Quantize an 8-bit image to `bits` significant bits.
    ///
    /// Each sample is truncated to the nearest multiple of
    /// `2^(8 - bits)` below it. The intensity range stays 8-bit; only
    /// the number of distinct levels shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `bits` is not in `1..=8`
    /// or the image is not 8-bit (`max_val != 255`).
    ///
    /// # Example
    ///
    /// ```
    /// use grisaille_core::GrayImage;
    ///
    /// let img = GrayImage::from_vec(2, 1, 255, vec![100, 231]).unwrap();
    /// let posterized = img.reduce_depth(2).unwrap();
    /// assert_eq!(posterized.data(), &[64, 192]);
    /// ```
    pub fn reduce_depth(&self, bits: u32) -> Result<GrayImage> {
        if !(1..=8).contains(&bits) {
            return Err(Error::InvalidParameter(
                "bits must be in 1..=8".to_string(),
            ));
        }
        if self.max_val() != 255 {
            return Err(Error::InvalidParameter(
                "depth reduction requires an 8-bit image".to_string(),
            ));
        }
        let step = 1u8 << (8 - bits);
        let data = self.data().iter().map(|&v| (v / step) * step).collect();
        GrayImage::from_vec(self.width(), self.height(), 255, data)
    }

    /// Binarize the image against a threshold.
    ///
    /// Produces a bilevel image (`max_val = 1`) with 1 where the sample
    /// is strictly above `thresh` and 0 elsewhere.
    pub fn threshold_to_binary(&self, thresh: u8) -> GrayImage {
        let data = self
            .data()
            .iter()
            .map(|&v| u8::from(v > thresh))
            .collect();
        GrayImage::from_raw(self.width, self.height, 1, data)
    }
}
