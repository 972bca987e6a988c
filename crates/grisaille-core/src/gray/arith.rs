//! Image arithmetic operations
//!
//! Pixel-wise composition of grayscale images:
//!
//! - Addition clipped to the valid range (`add_clipped`)
//! - Subtraction floored at zero (`subtract_clipped`)
//! - Scaling by a constant factor (`multiply_constant`)
//!
//! All binary operations require both operands to have the same
//! dimensions and the same maximum intensity.

use super::GrayImage;
use crate::error::{Error, Result};

impl GrayImage {
    fn check_compatible(&self, other: &GrayImage) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        if self.max_val() != other.max_val() {
            return Err(Error::IncompatibleRanges(self.max_val(), other.max_val()));
        }
        Ok(())
    }

    /// Add another image to this one, clipping at `max_val`.
    ///
    /// # Errors
    ///
    /// Returns an error if the images differ in size or intensity range.
    ///
    /// # Example
    ///
    /// ```
    /// use grisaille_core::GrayImage;
    ///
    /// let a = GrayImage::from_vec(2, 1, 1, vec![0, 1]).unwrap();
    /// let b = GrayImage::from_vec(2, 1, 1, vec![1, 1]).unwrap();
    /// let sum = a.add_clipped(&b).unwrap();
    /// assert_eq!(sum.data(), &[1, 1]);
    /// ```
    pub fn add_clipped(&self, other: &GrayImage) -> Result<GrayImage> {
        self.check_compatible(other)?;
        let max = self.max_val();
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| (u16::from(a) + u16::from(b)).min(u16::from(max)) as u8)
            .collect();
        GrayImage::from_vec(self.width(), self.height(), max, data)
    }

    /// Subtract another image from this one, flooring at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the images differ in size or intensity range.
    pub fn subtract_clipped(&self, other: &GrayImage) -> Result<GrayImage> {
        self.check_compatible(other)?;
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| a.saturating_sub(b))
            .collect();
        GrayImage::from_vec(self.width(), self.height(), self.max_val(), data)
    }

    /// Multiply all samples by a constant factor.
    ///
    /// Results are rounded and clipped to `max_val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is negative.
    pub fn multiply_constant(&self, factor: f32) -> Result<GrayImage> {
        if factor < 0.0 {
            return Err(Error::InvalidParameter("factor must be >= 0.0".to_string()));
        }
        let max = self.max_val();
        let data = self
            .data()
            .iter()
            .map(|&v| {
                let scaled = (f32::from(v) * factor + 0.5) as u32;
                scaled.min(u32::from(max)) as u8
            })
            .collect();
        GrayImage::from_vec(self.width(), self.height(), max, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_clipped_saturates() {
        let a = GrayImage::from_vec(3, 1, 255, vec![10, 200, 255]).unwrap();
        let b = GrayImage::from_vec(3, 1, 255, vec![5, 100, 1]).unwrap();
        let sum = a.add_clipped(&b).unwrap();
        assert_eq!(sum.data(), &[15, 255, 255]);
    }

    #[test]
    fn test_add_clipped_bilevel() {
        let a = GrayImage::from_vec(4, 1, 1, vec![0, 0, 1, 1]).unwrap();
        let b = GrayImage::from_vec(4, 1, 1, vec![0, 1, 0, 1]).unwrap();
        let sum = a.add_clipped(&b).unwrap();
        assert_eq!(sum.data(), &[0, 1, 1, 1]);
    }

    #[test]
    fn test_subtract_clipped_floors_at_zero() {
        let a = GrayImage::from_vec(3, 1, 255, vec![10, 5, 0]).unwrap();
        let b = GrayImage::from_vec(3, 1, 255, vec![5, 10, 1]).unwrap();
        let diff = a.subtract_clipped(&b).unwrap();
        assert_eq!(diff.data(), &[5, 0, 0]);
    }

    #[test]
    fn test_binary_ops_reject_mismatched_sizes() {
        let a = GrayImage::new(2, 2, 255).unwrap();
        let b = GrayImage::new(3, 2, 255).unwrap();
        assert!(a.add_clipped(&b).is_err());
        assert!(a.subtract_clipped(&b).is_err());
    }

    #[test]
    fn test_binary_ops_reject_mismatched_ranges() {
        let a = GrayImage::new(2, 2, 255).unwrap();
        let b = GrayImage::new(2, 2, 15).unwrap();
        assert!(a.add_clipped(&b).is_err());
    }

    #[test]
    fn test_multiply_constant_rounds_and_clips() {
        let img = GrayImage::from_vec(3, 1, 15, vec![3, 7, 9]).unwrap();
        let doubled = img.multiply_constant(2.0).unwrap();
        assert_eq!(doubled.data(), &[6, 14, 15]);

        let halved = img.multiply_constant(0.5).unwrap();
        assert_eq!(halved.data(), &[2, 4, 5]);
    }

    #[test]
    fn test_multiply_constant_rejects_negative() {
        let img = GrayImage::new(2, 2, 255).unwrap();
        assert!(img.multiply_constant(-1.0).is_err());
    }
}
