//! Row kernels: four realizations of the same per-row resize contract.
//!
//! Each kernel exposes a single entrypoint that renders one output row.
//! A row is a pure function of the source view and the row index, with
//! no writes outside the row's slice, which is what lets the
//! dispatcher run rows in any order and in parallel.
//!
//! The variants differ only in vector width and buffer-access checking:
//!
//! - [`scalar::resize_row`] - one pixel at a time, scalar codec.
//! - [`scalar::resize_row_unchecked`] - same arithmetic, unchecked
//!   indexing, multiversioned so the compiler may auto-vectorize.
//! - [`x4::resize_row`] - 4 output columns per step in `f32x4` lanes.
//! - [`x8::resize_row`] - 8 output columns per step in `f32x8` lanes.
//!
//! All four produce byte-identical rows for any valid input: the lane
//! arithmetic everywhere is the plain `a + (b − a)·t` lerp (never FMA)
//! and every path encodes through the same table steps.

pub(crate) mod scalar;
pub(crate) mod x4;
pub(crate) mod x8;

use crate::codec::{f32_to_srgb8, f32_to_unorm8, srgb8_to_f32, unorm8_to_f32};
use crate::pixel::Rgba8;

/// Borrowed view of the source raster, shared by every row kernel.
#[derive(Clone, Copy)]
pub(crate) struct SourceView<'a> {
    pub pixels: &'a [Rgba8],
    pub width: usize,
    pub height: usize,
}

/// `a + (b − a)·t`, for `f32` and `wide` vectors alike.
#[inline(always)]
pub(crate) fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Copy
        + core::ops::Add<Output = T>
        + core::ops::Sub<Output = T>
        + core::ops::Mul<Output = T>,
{
    a + (b - a) * t
}

/// Two-axis lerp over the four neighbors: across X first, then Y.
#[inline(always)]
pub(crate) fn bilerp<T>(s11: T, s21: T, s12: T, s22: T, qx: T, qy: T) -> T
where
    T: Copy
        + core::ops::Add<Output = T>
        + core::ops::Sub<Output = T>
        + core::ops::Mul<Output = T>,
{
    let l1 = lerp(s11, s21, qx);
    let l2 = lerp(s12, s22, qx);
    lerp(l1, l2, qy)
}

/// Decode, bilinearly blend and re-encode one output pixel from its four
/// neighbors. Used by the scalar kernel and as the SIMD kernels' scalar
/// remainder; the operations match the lane arithmetic exactly.
#[inline(always)]
pub(crate) fn blend_pixel(
    s11: Rgba8,
    s21: Rgba8,
    s12: Rgba8,
    s22: Rgba8,
    qx: f32,
    qy: f32,
) -> Rgba8 {
    let r = bilerp(
        srgb8_to_f32(s11.r),
        srgb8_to_f32(s21.r),
        srgb8_to_f32(s12.r),
        srgb8_to_f32(s22.r),
        qx,
        qy,
    );
    let g = bilerp(
        srgb8_to_f32(s11.g),
        srgb8_to_f32(s21.g),
        srgb8_to_f32(s12.g),
        srgb8_to_f32(s22.g),
        qx,
        qy,
    );
    let b = bilerp(
        srgb8_to_f32(s11.b),
        srgb8_to_f32(s21.b),
        srgb8_to_f32(s12.b),
        srgb8_to_f32(s22.b),
        qx,
        qy,
    );
    let a = bilerp(
        unorm8_to_f32(s11.a),
        unorm8_to_f32(s21.a),
        unorm8_to_f32(s12.a),
        unorm8_to_f32(s22.a),
        qx,
        qy,
    );
    Rgba8::new(
        f32_to_srgb8(r),
        f32_to_srgb8(g),
        f32_to_srgb8(b),
        f32_to_unorm8(a),
    )
}
