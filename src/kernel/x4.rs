//! 4-wide row kernel over `f32x4` lanes.
//!
//! Each step renders 4 consecutive output columns. Neighbors are gathered
//! scalarly (for this four-corner access pattern, dependent scalar loads
//! beat gather intrinsics on the hardware this was tuned on) and each
//! corner's RGBA channels are deinterleaved into four `f32x4` registers,
//! lane = output column. The trailing `out_width % 4` columns take a
//! scalar remainder loop with the same arithmetic, so tail bytes match
//! the vector path and the scalar kernel alike.

use wide::f32x4;

use crate::kernel::{bilerp, blend_pixel, SourceView};
use crate::pixel::Rgba8;
use crate::sampling::{sample_axis, AxisSample};
use crate::simd::{f32x4_to_srgb8, f32x4_to_unorm8, srgb8_to_f32x4, unorm8_to_f32x4};

const LANES: usize = 4;

crate::simd_multiversion! {
    /// Render one output row, 4 columns per step.
    pub(crate) fn resize_row<'a>(
        src: SourceView<'a>,
        dst_row: &mut [Rgba8],
        yo: usize,
        out_height: usize,
    ) {
        let out_width = dst_row.len();
        let y = sample_axis(yo, out_height, src.height);
        let qy = f32x4::splat(y.frac);
        let row_lo = y.lo * src.width;
        let row_hi = y.hi * src.width;

        let mut xo = 0;
        while xo + LANES <= out_width {
            let xs: [AxisSample; LANES] =
                core::array::from_fn(|l| sample_axis(xo + l, out_width, src.width));
            let block = blend_block(src, row_lo, row_hi, &xs, qy);
            dst_row[xo..xo + LANES].copy_from_slice(&block);
            xo += LANES;
        }

        for xo in xo..out_width {
            let x = sample_axis(xo, out_width, src.width);
            dst_row[xo] = blend_pixel(
                src.pixels[row_lo + x.lo],
                src.pixels[row_lo + x.hi],
                src.pixels[row_hi + x.lo],
                src.pixels[row_hi + x.hi],
                x.frac,
                y.frac,
            );
        }
    }
}

/// Blend 4 output pixels whose X windows are described by `xs`.
#[inline(always)]
fn blend_block(
    src: SourceView<'_>,
    row_lo: usize,
    row_hi: usize,
    xs: &[AxisSample; LANES],
    qy: f32x4,
) -> [Rgba8; LANES] {
    let qx = f32x4::from([xs[0].frac, xs[1].frac, xs[2].frac, xs[3].frac]);

    let p11: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_lo + xs[l].lo]);
    let p21: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_lo + xs[l].hi]);
    let p12: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_hi + xs[l].lo]);
    let p22: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_hi + xs[l].hi]);

    let [r11, g11, b11, a11] = decode4(p11);
    let [r21, g21, b21, a21] = decode4(p21);
    let [r12, g12, b12, a12] = decode4(p12);
    let [r22, g22, b22, a22] = decode4(p22);

    let r = f32x4_to_srgb8(bilerp(r11, r21, r12, r22, qx, qy));
    let g = f32x4_to_srgb8(bilerp(g11, g21, g12, g22, qx, qy));
    let b = f32x4_to_srgb8(bilerp(b11, b21, b12, b22, qx, qy));
    let a = f32x4_to_unorm8(bilerp(a11, a21, a12, a22, qx, qy));

    core::array::from_fn(|l| Rgba8::new(r[l], g[l], b[l], a[l]))
}

/// Deinterleave 4 pixels into channel-planar lanes: R, G, B linear sRGB
/// and linear alpha.
#[inline(always)]
fn decode4(p: [Rgba8; LANES]) -> [f32x4; 4] {
    [
        srgb8_to_f32x4([p[0].r, p[1].r, p[2].r, p[3].r]),
        srgb8_to_f32x4([p[0].g, p[1].g, p[2].g, p[3].g]),
        srgb8_to_f32x4([p[0].b, p[1].b, p[2].b, p[3].b]),
        unorm8_to_f32x4([p[0].a, p[1].a, p[2].a, p[3].a]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::scalar;

    #[test]
    fn test_matches_scalar_including_tail() {
        let mut state = 0x9e37_79b9u32;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };
        let (wi, hi) = (11, 5);
        let src: Vec<Rgba8> = (0..wi * hi)
            .map(|_| Rgba8::from_u32_le(next()))
            .collect();
        let v = SourceView {
            pixels: &src,
            width: wi,
            height: hi,
        };

        // Widths exercising every tail length 0..=3.
        for wo in [1, 2, 3, 4, 5, 6, 7, 8, 9, 31, 32, 33] {
            let ho = 3;
            let mut expected = vec![Rgba8::default(); wo];
            let mut got = vec![Rgba8::default(); wo];
            for yo in 0..ho {
                scalar::resize_row(v, &mut expected, yo, ho);
                resize_row(v, &mut got, yo, ho);
                assert_eq!(got, expected, "wo={} row {} diverged", wo, yo);
            }
        }
    }
}
