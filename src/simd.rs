//! SIMD forms of the channel codec over `wide` vectors.
//!
//! Every function here is the lane-wise image of its scalar counterpart
//! in [`crate::codec`] and returns identical bytes for identical inputs;
//! the cross-kernel byte-identity contract hangs on this, so the lane
//! arithmetic mirrors the scalar operation order exactly (same divisions,
//! same inverted-comparison NaN scrub, no FMA contraction).
//!
//! Range clamping and blending run vector-wide; the table lookups and the
//! final bias/scale step are scalar reads from the L1-resident const
//! tables through the same table step the scalar encoder uses. Arrays of
//! lanes sit at every boundary so callers never juggle mask types.

use wide::{f32x4, f32x8, CmpGt};

use crate::codec::{encode_srgb_bits, MAXV_BITS, MINV_BITS};
use crate::tables::SRGB8_TO_F32;

const ZERO_X4: f32x4 = f32x4::new([0.0; 4]);
const ONE_X4: f32x4 = f32x4::new([1.0; 4]);
const U8_MAX_X4: f32x4 = f32x4::new([255.0; 4]);
const HALF_X4: f32x4 = f32x4::new([0.5; 4]);

const ZERO_X8: f32x8 = f32x8::new([0.0; 8]);
const ONE_X8: f32x8 = f32x8::new([1.0; 8]);
const U8_MAX_X8: f32x8 = f32x8::new([255.0; 8]);
const HALF_X8: f32x8 = f32x8::new([0.5; 8]);

// ============================================================================
// Decoding: u8 codes to linear lanes
// ============================================================================

/// Decode 4 sRGB codes to linear light, one per lane.
#[inline(always)]
pub fn srgb8_to_f32x4(codes: [u8; 4]) -> f32x4 {
    f32x4::from([
        SRGB8_TO_F32[codes[0] as usize],
        SRGB8_TO_F32[codes[1] as usize],
        SRGB8_TO_F32[codes[2] as usize],
        SRGB8_TO_F32[codes[3] as usize],
    ])
}

/// Decode 8 sRGB codes to linear light, one per lane.
#[inline(always)]
pub fn srgb8_to_f32x8(codes: [u8; 8]) -> f32x8 {
    f32x8::from([
        SRGB8_TO_F32[codes[0] as usize],
        SRGB8_TO_F32[codes[1] as usize],
        SRGB8_TO_F32[codes[2] as usize],
        SRGB8_TO_F32[codes[3] as usize],
        SRGB8_TO_F32[codes[4] as usize],
        SRGB8_TO_F32[codes[5] as usize],
        SRGB8_TO_F32[codes[6] as usize],
        SRGB8_TO_F32[codes[7] as usize],
    ])
}

/// Decode 4 unorm codes (linear alpha) to float, one per lane.
///
/// Divides like the scalar decoder so the lanes round identically.
#[inline(always)]
pub fn unorm8_to_f32x4(codes: [u8; 4]) -> f32x4 {
    f32x4::from([
        codes[0] as f32,
        codes[1] as f32,
        codes[2] as f32,
        codes[3] as f32,
    ]) / U8_MAX_X4
}

/// Decode 8 unorm codes (linear alpha) to float, one per lane.
#[inline(always)]
pub fn unorm8_to_f32x8(codes: [u8; 8]) -> f32x8 {
    f32x8::from([
        codes[0] as f32,
        codes[1] as f32,
        codes[2] as f32,
        codes[3] as f32,
        codes[4] as f32,
        codes[5] as f32,
        codes[6] as f32,
        codes[7] as f32,
    ]) / U8_MAX_X8
}

// ============================================================================
// Encoding: linear lanes to u8 codes
// ============================================================================

/// Encode 4 linear lanes to sRGB codes. NaN lanes encode as 0.
#[inline(always)]
pub fn f32x4_to_srgb8(v: f32x4) -> [u8; 4] {
    let minv = f32x4::splat(f32::from_bits(MINV_BITS));
    let maxv = f32x4::splat(f32::from_bits(MAXV_BITS));
    // NaN lanes fail the comparison and take the minv arm, exactly like
    // the scalar encoder's inverted test.
    let v = v.cmp_gt(minv).blend(v, minv);
    let v = v.cmp_gt(maxv).blend(maxv, v);
    let lanes: [f32; 4] = v.into();
    [
        encode_srgb_bits(lanes[0].to_bits()),
        encode_srgb_bits(lanes[1].to_bits()),
        encode_srgb_bits(lanes[2].to_bits()),
        encode_srgb_bits(lanes[3].to_bits()),
    ]
}

/// Encode 8 linear lanes to sRGB codes. NaN lanes encode as 0.
#[inline(always)]
pub fn f32x8_to_srgb8(v: f32x8) -> [u8; 8] {
    let minv = f32x8::splat(f32::from_bits(MINV_BITS));
    let maxv = f32x8::splat(f32::from_bits(MAXV_BITS));
    let v = v.cmp_gt(minv).blend(v, minv);
    let v = v.cmp_gt(maxv).blend(maxv, v);
    let lanes: [f32; 8] = v.into();
    [
        encode_srgb_bits(lanes[0].to_bits()),
        encode_srgb_bits(lanes[1].to_bits()),
        encode_srgb_bits(lanes[2].to_bits()),
        encode_srgb_bits(lanes[3].to_bits()),
        encode_srgb_bits(lanes[4].to_bits()),
        encode_srgb_bits(lanes[5].to_bits()),
        encode_srgb_bits(lanes[6].to_bits()),
        encode_srgb_bits(lanes[7].to_bits()),
    ]
}

/// Encode 4 linear lanes to unorm codes (linear alpha). NaN lanes
/// encode as 0.
#[inline(always)]
pub fn f32x4_to_unorm8(v: f32x4) -> [u8; 4] {
    let v = v.cmp_gt(ZERO_X4).blend(v, ZERO_X4);
    let v = v.cmp_gt(ONE_X4).blend(ONE_X4, v);
    let scaled = v * U8_MAX_X4 + HALF_X4;
    let lanes: [f32; 4] = scaled.into();
    // Lanes are in [0.5, 255.5] here, so the truncating cast matches the
    // scalar encoder's rounding.
    [
        lanes[0] as u8,
        lanes[1] as u8,
        lanes[2] as u8,
        lanes[3] as u8,
    ]
}

/// Encode 8 linear lanes to unorm codes (linear alpha). NaN lanes
/// encode as 0.
#[inline(always)]
pub fn f32x8_to_unorm8(v: f32x8) -> [u8; 8] {
    let v = v.cmp_gt(ZERO_X8).blend(v, ZERO_X8);
    let v = v.cmp_gt(ONE_X8).blend(ONE_X8, v);
    let scaled = v * U8_MAX_X8 + HALF_X8;
    let lanes: [f32; 8] = scaled.into();
    [
        lanes[0] as u8,
        lanes[1] as u8,
        lanes[2] as u8,
        lanes[3] as u8,
        lanes[4] as u8,
        lanes[5] as u8,
        lanes[6] as u8,
        lanes[7] as u8,
    ]
}
