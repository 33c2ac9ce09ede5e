//! Scalar row kernels: checked and unchecked.

use crate::kernel::{blend_pixel, SourceView};
use crate::pixel::Rgba8;
use crate::sampling::sample_axis;

/// Render one output row, one pixel at a time, with checked indexing.
pub(crate) fn resize_row(
    src: SourceView<'_>,
    dst_row: &mut [Rgba8],
    yo: usize,
    out_height: usize,
) {
    let out_width = dst_row.len();
    let y = sample_axis(yo, out_height, src.height);
    let row_lo = y.lo * src.width;
    let row_hi = y.hi * src.width;

    for (xo, out) in dst_row.iter_mut().enumerate() {
        let x = sample_axis(xo, out_width, src.width);
        let s11 = src.pixels[row_lo + x.lo];
        let s21 = src.pixels[row_lo + x.hi];
        let s12 = src.pixels[row_hi + x.lo];
        let s22 = src.pixels[row_hi + x.hi];
        *out = blend_pixel(s11, s21, s12, s22, x.frac, y.frac);
    }
}

crate::simd_multiversion! {
    /// Render one output row with unchecked buffer access, compiled for
    /// the crate's SIMD target set so the loop may auto-vectorize.
    ///
    /// Bytes match [`resize_row`] exactly: the arithmetic is identical,
    /// only the bounds checks differ.
    pub(crate) fn resize_row_unchecked<'a>(
        src: SourceView<'a>,
        dst_row: &mut [Rgba8],
        yo: usize,
        out_height: usize,
    ) {
        let out_width = dst_row.len();
        let y = sample_axis(yo, out_height, src.height);
        let row_lo = y.lo * src.width;
        let row_hi = y.hi * src.width;

        for xo in 0..out_width {
            let x = sample_axis(xo, out_width, src.width);
            // Safety: sample_axis clamps every index to [0, dim - 1] and
            // the dispatcher verified pixels.len() == width * height, so
            // row_* + x.* < pixels.len(); xo < out_width == dst_row.len().
            unsafe {
                let s11 = *src.pixels.get_unchecked(row_lo + x.lo);
                let s21 = *src.pixels.get_unchecked(row_lo + x.hi);
                let s12 = *src.pixels.get_unchecked(row_hi + x.lo);
                let s22 = *src.pixels.get_unchecked(row_hi + x.hi);
                *dst_row.get_unchecked_mut(xo) =
                    blend_pixel(s11, s21, s12, s22, x.frac, y.frac);
            }
        }
    }
}
