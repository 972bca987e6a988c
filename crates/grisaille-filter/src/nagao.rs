//! Nagao-Matsuyama edge-preserving smoothing
//!
//! For every pixel, the nine candidate regions from
//! [`NAGAO_TEMPLATES`](crate::template::NAGAO_TEMPLATES) are evaluated
//! over a mirror-padded copy of the input; the pixel is replaced by the
//! rounded mean of the region with the smallest population variance.
//! Flat regions aligned with local structure win against regions that
//! straddle an edge, so noise is averaged away while edges stay sharp.
//!
//! # Algorithm
//!
//! Per pixel (y, x):
//!
//! 1. For each region, accumulate the integer sum and sum of squares of
//!    its member samples in the padded grid.
//! 2. Select the region with the strictly smallest population variance
//!    (divisor = cell count). Exact ties keep the earliest region in
//!    template order.
//! 3. Write the winning region's mean, rounded to the nearest integer.
//!
//! Variances are compared exactly in integer arithmetic (see
//! `RegionStats`), so the selection is bit-reproducible on every run
//! and every thread count.
//!
//! # Cost
//!
//! O(H * W * T * S) with T = 9 regions of S <= 9 cells each. Rows are
//! independent and are processed in parallel.
//!
//! # Input validation
//!
//! The shape is checked up front; pixel range is not. [`GrayImage`]
//! enforces `sample <= max_val` at construction and mutation, so the
//! engine trusts the container invariant instead of re-scanning the
//! input.

use crate::template::{NAGAO_TEMPLATES, PAD_RADIUS};
use crate::{FilterError, FilterResult};
use grisaille_core::GrayImage;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

/// Integer region statistics: cell count, sum, and sum of squares.
///
/// The population variance of the region is
/// `(count * sum_sq - sum^2) / count^2`. Two regions are compared
/// without the division: `a` is flatter than `b` iff
/// `a.scaled_variance * b.count^2 < b.scaled_variance * a.count^2`,
/// which stays well inside `u64` for 8-bit samples and <= 9 cells.
#[derive(Clone, Copy)]
struct RegionStats {
    count: u64,
    sum: u64,
    scaled_variance: u64,
}

impl RegionStats {
    fn flatter_than(&self, other: &RegionStats) -> bool {
        self.scaled_variance * other.count * other.count
            < other.scaled_variance * self.count * self.count
    }

    /// Region mean, rounded half up.
    fn rounded_mean(&self) -> u8 {
        ((2 * self.sum + self.count) / (2 * self.count)) as u8
    }
}

/// Gather one region's statistics around `base` in the padded buffer.
#[inline]
fn region_stats(padded: &[u8], base: usize, offsets: &[isize]) -> RegionStats {
    let mut sum: u32 = 0;
    let mut sum_sq: u32 = 0;
    for &off in offsets {
        let v = u32::from(padded[(base as isize + off) as usize]);
        sum += v;
        sum_sq += v * v;
    }
    let count = offsets.len() as u64;
    RegionStats {
        count,
        sum: u64::from(sum),
        scaled_variance: count * u64::from(sum_sq) - u64::from(sum) * u64::from(sum),
    }
}

/// Apply the Nagao-Matsuyama filter.
///
/// Returns a new image of identical shape and intensity range. The input
/// is not modified; the function has no side effects and two calls on
/// the same input produce bit-identical results.
///
/// # Errors
///
/// Returns [`FilterError::InvalidShape`] for a zero-sized grid.
///
/// # Example
///
/// ```
/// use grisaille_core::GrayImage;
/// use grisaille_filter::nagao;
///
/// let img = GrayImage::from_vec(5, 5, 255, vec![10; 25]).unwrap();
/// let smoothed = nagao(&img).unwrap();
/// assert_eq!(smoothed.data(), img.data());
/// ```
pub fn nagao(pix: &GrayImage) -> FilterResult<GrayImage> {
    nagao_impl(pix, None)
}

/// Apply the Nagao-Matsuyama filter, reporting per-row progress.
///
/// `on_row` is invoked once per completed row with
/// `(completed_rows, total_rows)`. Rows are processed in parallel, so
/// calls may arrive from multiple threads; the completed count is
/// monotonic per call but calls themselves are unordered. The observer
/// cannot affect the numeric result.
pub fn nagao_with_progress(
    pix: &GrayImage,
    on_row: &(dyn Fn(u32, u32) + Sync),
) -> FilterResult<GrayImage> {
    nagao_impl(pix, Some(on_row))
}

fn nagao_impl(
    pix: &GrayImage,
    progress: Option<&(dyn Fn(u32, u32) + Sync)>,
) -> FilterResult<GrayImage> {
    let width = pix.width();
    let height = pix.height();
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidShape { width, height });
    }

    let padded = pix.add_mirrored_border(PAD_RADIUS)?;
    let padded_width = padded.width() as usize;
    let padded_data = padded.data();
    let pad = PAD_RADIUS as usize;

    // Resolve each template's (dy, dx) offsets into linear offsets in the
    // padded buffer, once per call.
    let linear_offsets: Vec<Vec<isize>> = NAGAO_TEMPLATES
        .iter()
        .map(|t| {
            t.offsets
                .iter()
                .map(|&(dy, dx)| dy as isize * padded_width as isize + dx as isize)
                .collect()
        })
        .collect();

    let w = width as usize;
    let mut out = vec![0u8; w * height as usize];
    let rows_done = AtomicU32::new(0);

    out.par_chunks_mut(w).enumerate().for_each(|(y, out_row)| {
        let row_base = (y + pad) * padded_width + pad;
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let base = row_base + x;
            let mut best = region_stats(padded_data, base, &linear_offsets[0]);
            for offsets in &linear_offsets[1..] {
                let stats = region_stats(padded_data, base, offsets);
                if stats.flatter_than(&best) {
                    best = stats;
                }
            }
            *out_px = best.rounded_mean();
        }
        if let Some(on_row) = progress {
            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            on_row(done, height);
        }
    });

    Ok(GrayImage::from_vec(width, height, pix.max_val(), out)?)
}
