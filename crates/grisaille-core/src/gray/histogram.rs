//! Histogram generation for grayscale images

use super::GrayImage;

impl GrayImage {
    /// Count the occurrences of each intensity value.
    ///
    /// Returns a vector with `max_val + 1` bins; bin `i` holds the number
    /// of samples equal to `i`.
    ///
    /// # Example
    ///
    /// ```
    /// use grisaille_core::GrayImage;
    ///
    /// let img = GrayImage::from_vec(2, 2, 3, vec![0, 1, 1, 3]).unwrap();
    /// assert_eq!(img.histogram(), vec![1, 2, 0, 1]);
    /// ```
    pub fn histogram(&self) -> Vec<u64> {
        let mut bins = vec![0u64; usize::from(self.max_val()) + 1];
        for &v in self.data() {
            bins[usize::from(v)] += 1;
        }
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bin_count() {
        let img = GrayImage::new(10, 10, 255).unwrap();
        assert_eq!(img.histogram().len(), 256);

        let bilevel = GrayImage::new(10, 10, 1).unwrap();
        assert_eq!(bilevel.histogram().len(), 2);
    }

    #[test]
    fn test_histogram_counts_all_pixels() {
        let img = GrayImage::from_vec(3, 2, 15, vec![5, 5, 5, 0, 15, 15]).unwrap();
        let hist = img.histogram();
        assert_eq!(hist[0], 1);
        assert_eq!(hist[5], 3);
        assert_eq!(hist[15], 2);
        assert_eq!(hist.iter().sum::<u64>(), 6);
    }
}
