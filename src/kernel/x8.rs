//! 8-wide row kernel over `f32x8` lanes.
//!
//! Same structure as the 4-wide kernel at twice the width: 8 consecutive
//! output columns per step, scalar neighbor gathers, channel-planar
//! `f32x8` registers. The final partial block re-clamps lane X indexes to
//! the last column and stores only the in-bounds lanes, so masked-out
//! lanes never read or write out of range.

use wide::f32x8;

use crate::kernel::{bilerp, SourceView};
use crate::pixel::Rgba8;
use crate::sampling::{sample_axis, AxisSample};
use crate::simd::{f32x8_to_srgb8, f32x8_to_unorm8, srgb8_to_f32x8, unorm8_to_f32x8};

const LANES: usize = 8;

crate::simd_multiversion! {
    /// Render one output row, 8 columns per step.
    pub(crate) fn resize_row<'a>(
        src: SourceView<'a>,
        dst_row: &mut [Rgba8],
        yo: usize,
        out_height: usize,
    ) {
        let out_width = dst_row.len();
        let y = sample_axis(yo, out_height, src.height);
        let qy = f32x8::splat(y.frac);
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

        if xo < out_width {
            // Lanes past the row's end re-sample the last column; their
            // results are computed and discarded by the partial store.
            let last = out_width - 1;
            let xs: [AxisSample; LANES] =
                core::array::from_fn(|l| sample_axis((xo + l).min(last), out_width, src.width));
            let block = blend_block(src, row_lo, row_hi, &xs, qy);
            let live = out_width - xo;
            dst_row[xo..].copy_from_slice(&block[..live]);
        }
    }
}

/// Blend 8 output pixels whose X windows are described by `xs`.
#[inline(always)]
fn blend_block(
    src: SourceView<'_>,
    row_lo: usize,
    row_hi: usize,
    xs: &[AxisSample; LANES],
    qy: f32x8,
) -> [Rgba8; LANES] {
    let qx = f32x8::from([
        xs[0].frac, xs[1].frac, xs[2].frac, xs[3].frac, xs[4].frac, xs[5].frac, xs[6].frac,
        xs[7].frac,
    ]);

    let p11: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_lo + xs[l].lo]);
    let p21: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_lo + xs[l].hi]);
    let p12: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_hi + xs[l].lo]);
    let p22: [Rgba8; LANES] = core::array::from_fn(|l| src.pixels[row_hi + xs[l].hi]);

    let [r11, g11, b11, a11] = decode8(p11);
    let [r21, g21, b21, a21] = decode8(p21);
    let [r12, g12, b12, a12] = decode8(p12);
    let [r22, g22, b22, a22] = decode8(p22);

    let r = f32x8_to_srgb8(bilerp(r11, r21, r12, r22, qx, qy));
    let g = f32x8_to_srgb8(bilerp(g11, g21, g12, g22, qx, qy));
    let b = f32x8_to_srgb8(bilerp(b11, b21, b12, b22, qx, qy));
    let a = f32x8_to_unorm8(bilerp(a11, a21, a12, a22, qx, qy));

    core::array::from_fn(|l| Rgba8::new(r[l], g[l], b[l], a[l]))
}

/// Deinterleave 8 pixels into channel-planar lanes.
#[inline(always)]
fn decode8(p: [Rgba8; LANES]) -> [f32x8; 4] {
    [
        srgb8_to_f32x8([
            p[0].r, p[1].r, p[2].r, p[3].r, p[4].r, p[5].r, p[6].r, p[7].r,
        ]),
        srgb8_to_f32x8([
            p[0].g, p[1].g, p[2].g, p[3].g, p[4].g, p[5].g, p[6].g, p[7].g,
        ]),
        srgb8_to_f32x8([
            p[0].b, p[1].b, p[2].b, p[3].b, p[4].b, p[5].b, p[6].b, p[7].b,
        ]),
        unorm8_to_f32x8([
            p[0].a, p[1].a, p[2].a, p[3].a, p[4].a, p[5].a, p[6].a, p[7].a,
        ]),
    ]
}
