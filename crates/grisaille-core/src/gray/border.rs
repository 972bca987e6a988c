//! Border padding for grayscale images
//!
//! Adds a mirrored border around an image so that sliding-window
//! operations can index a full neighborhood at every original pixel
//! without boundary checks in their inner loops.

use super::GrayImage;
use crate::error::{Error, Result};

/// Reflect an out-of-range coordinate back into `[0, len)`.
///
/// The mirror includes the edge sample (index -1 maps to 0, -2 to 1, ...),
/// and reflection repeats until the coordinate lands inside the grid, so
/// borders wider than the image itself are well-defined.
fn mirror_index(mut i: i64, len: u32) -> u32 {
    let len = i64::from(len);
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= len {
            i = 2 * len - 1 - i;
        } else {
            return i as u32;
        }
    }
}

impl GrayImage {
    /// Add a mirrored border around the image.
    ///
    /// Creates a new image with `npix` pixels of border on all sides,
    /// filled by reflecting the source across each edge. Works for any
    /// source size >= 1x1 and any border width.
    ///
    /// # Arguments
    ///
    /// * `npix` - Border width in pixels
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + 2*npix, height + 2*npix)` and
    /// the same `max_val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the padded dimensions would
    /// overflow.
    pub fn add_mirrored_border(&self, npix: u32) -> Result<GrayImage> {
        let grow = npix
            .checked_mul(2)
            .and_then(|g| g.checked_add(self.width()).map(|w| (w, g)))
            .and_then(|(w, g)| g.checked_add(self.height()).map(|h| (w, h)));
        let Some((new_w, new_h)) = grow else {
            return Err(Error::InvalidParameter(
                "border size overflows image dimensions".to_string(),
            ));
        };

        // Column map is identical for every row; build it once.
        let col_map: Vec<u32> = (0..new_w)
            .map(|px| mirror_index(i64::from(px) - i64::from(npix), self.width()))
            .collect();

        let mut data = Vec::with_capacity(new_w as usize * new_h as usize);
        for py in 0..new_h {
            let sy = mirror_index(i64::from(py) - i64::from(npix), self.height());
            let src_row = self.row(sy);
            data.extend(col_map.iter().map(|&sx| src_row[sx as usize]));
        }

        // Every sample is copied from the source, so the range invariant holds.
        Ok(GrayImage::from_raw(new_w, new_h, self.max_val(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_index_inside() {
        assert_eq!(mirror_index(0, 5), 0);
        assert_eq!(mirror_index(4, 5), 4);
    }

    #[test]
    fn test_mirror_index_reflects_edges() {
        // left: -1 -> 0, -2 -> 1
        assert_eq!(mirror_index(-1, 5), 0);
        assert_eq!(mirror_index(-2, 5), 1);
        // right: 5 -> 4, 6 -> 3
        assert_eq!(mirror_index(5, 5), 4);
        assert_eq!(mirror_index(6, 5), 3);
    }

    #[test]
    fn test_mirror_index_single_sample() {
        for i in -4..4 {
            assert_eq!(mirror_index(i, 1), 0);
        }
    }

    #[test]
    fn test_add_mirrored_border_values() {
        // 2x2 image:
        //   1 2
        //   3 4
        let img = GrayImage::from_vec(2, 2, 255, vec![1, 2, 3, 4]).unwrap();
        let padded = img.add_mirrored_border(1).unwrap();

        assert_eq!(padded.width(), 4);
        assert_eq!(padded.height(), 4);
        // Expected:
        //   1 1 2 2
        //   1 1 2 2
        //   3 3 4 4
        //   3 3 4 4
        assert_eq!(
            padded.data(),
            &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn test_add_mirrored_border_wider_than_image() {
        let img = GrayImage::from_vec(1, 1, 255, vec![7]).unwrap();
        let padded = img.add_mirrored_border(3).unwrap();
        assert_eq!(padded.width(), 7);
        assert_eq!(padded.height(), 7);
        assert!(padded.data().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_add_mirrored_border_zero_is_copy() {
        let img = GrayImage::from_vec(3, 1, 255, vec![5, 6, 7]).unwrap();
        let padded = img.add_mirrored_border(0).unwrap();
        assert_eq!(padded, img);
    }

    #[test]
    fn test_add_mirrored_border_keeps_max_val() {
        let img = GrayImage::new(4, 4, 15).unwrap();
        let padded = img.add_mirrored_border(2).unwrap();
        assert_eq!(padded.max_val(), 15);
    }
}
