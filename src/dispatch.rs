//! Kernel selection, precondition checks and row scheduling.
//!
//! The dispatcher is the only component that touches whole buffers: it
//! validates dimensions and lengths, picks a row kernel for the requested
//! [`Mode`], and fans rows out over rayon. Each row writes a disjoint
//! `out_width` slice of the output, so rows need no synchronization and
//! may complete in any order; the call returns once every row has run.

use rayon::prelude::*;
use thiserror::Error;

use crate::kernel::{scalar, x4, x8, SourceView};
use crate::pixel::Rgba8;

/// Which kernel renders the rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One pixel at a time, checked indexing.
    Scalar,
    /// Scalar arithmetic with unchecked buffer access, compiled for the
    /// crate's SIMD target set so the compiler may auto-vectorize.
    ScalarUnsafe,
    /// Explicit 4-wide SIMD.
    Vectorized,
    /// Explicit 8-wide SIMD. On x86-64 without AVX2 the dispatcher
    /// silently substitutes [`Mode::Vectorized`]; output bytes are
    /// identical either way.
    Wide,
}

impl Mode {
    /// Every variant, in comparison order.
    pub const ALL: [Mode; 4] = [
        Mode::Scalar,
        Mode::ScalarUnsafe,
        Mode::Vectorized,
        Mode::Wide,
    ];

    /// Short lowercase name, used in logs and benchmark IDs.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Scalar => "scalar",
            Mode::ScalarUnsafe => "scalar_unsafe",
            Mode::Vectorized => "vectorized",
            Mode::Wide => "wide",
        }
    }
}

/// Precondition violations reported by [`resize`] and the benchmark
/// entry points. All are checked on entry; nothing fails once rendering
/// starts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResizeError {
    /// A width or height was zero.
    #[error("image dimensions must be at least 1x1, got {width}x{height}")]
    BadDimensions {
        /// Offending width.
        width: usize,
        /// Offending height.
        height: usize,
    },
    /// A pixel buffer's length does not equal `width * height`.
    #[error("pixel buffer holds {len} pixels, which does not match {width}x{height}")]
    BufferMismatch {
        /// Actual buffer length in pixels.
        len: usize,
        /// Expected width.
        width: usize,
        /// Expected height.
        height: usize,
    },
    /// A benchmark was requested with zero iterations.
    #[error("benchmark iteration count must be at least 1")]
    BadIterations,
}

/// Check one buffer/dimension triple. The length comparison runs in u64
/// so `width * height` cannot wrap on 32-bit targets; a product too big
/// even for u64 can never match a real buffer and reports as a mismatch.
pub(crate) fn validate(len: usize, width: usize, height: usize) -> Result<(), ResizeError> {
    if width < 1 || height < 1 {
        return Err(ResizeError::BadDimensions { width, height });
    }
    let expected = (width as u64).checked_mul(height as u64);
    if expected != Some(len as u64) {
        return Err(ResizeError::BufferMismatch { len, width, height });
    }
    Ok(())
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn wide_lanes_supported() -> bool {
    std::arch::is_x86_feature_detected!("avx2")
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn wide_lanes_supported() -> bool {
    // Elsewhere `wide` lowers f32x8 to paired 4-wide registers; there is
    // no feature level to probe for.
    true
}

fn effective_mode(mode: Mode) -> Mode {
    if mode == Mode::Wide && !wide_lanes_supported() {
        log::debug!("8-wide SIMD unavailable on this CPU, substituting the 4-wide kernel");
        return Mode::Vectorized;
    }
    mode
}

/// Resize `src` (`src_width` x `src_height`) into `dst` (`dst_width` x
/// `dst_height`) with the kernel selected by `mode`.
///
/// Bilinear in linear light, edge-clamp addressing. The output bytes are
/// a pure function of the inputs and are identical across all modes.
/// Rows render in parallel on the rayon pool; the call blocks until the
/// whole image is done.
pub fn resize(
    mode: Mode,
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
) -> Result<(), ResizeError> {
    validate(src.len(), src_width, src_height)?;
    validate(dst.len(), dst_width, dst_height)?;

    let mode = effective_mode(mode);
    let view = SourceView {
        pixels: src,
        width: src_width,
        height: src_height,
    };

    dst.par_chunks_mut(dst_width)
        .enumerate()
        .for_each(|(yo, row)| match mode {
            Mode::Scalar => scalar::resize_row(view, row, yo, dst_height),
            Mode::ScalarUnsafe => scalar::resize_row_unchecked(view, row, yo, dst_height),
            Mode::Vectorized => x4::resize_row(view, row, yo, dst_height),
            Mode::Wide => x8::resize_row(view, row, yo, dst_height),
        });

    Ok(())
}

/// [`resize`] with [`Mode::Scalar`].
pub fn resize_scalar(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
) -> Result<(), ResizeError> {
    resize(Mode::Scalar, src, src_width, src_height, dst, dst_width, dst_height)
}

/// [`resize`] with [`Mode::ScalarUnsafe`].
pub fn resize_scalar_unsafe(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
) -> Result<(), ResizeError> {
    resize(
        Mode::ScalarUnsafe,
        src,
        src_width,
        src_height,
        dst,
        dst_width,
        dst_height,
    )
}

/// [`resize`] with [`Mode::Vectorized`].
pub fn resize_vectorized(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
) -> Result<(), ResizeError> {
    resize(
        Mode::Vectorized,
        src,
        src_width,
        src_height,
        dst,
        dst_width,
        dst_height,
    )
}

/// [`resize`] with [`Mode::Wide`].
pub fn resize_wide(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
) -> Result<(), ResizeError> {
    resize(Mode::Wide, src, src_width, src_height, dst, dst_width, dst_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{f32_to_srgb8, srgb8_to_f32};

    fn xorshift_raster(seed: u32, len: usize) -> Vec<Rgba8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                Rgba8::from_u32_le(state)
            })
            .collect()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let src = [Rgba8::default(); 4];
        let mut dst = [Rgba8::default(); 4];
        let err = resize(Mode::Scalar, &src, 0, 4, &mut dst, 2, 2).unwrap_err();
        assert_eq!(err, ResizeError::BadDimensions { width: 0, height: 4 });
        let err = resize(Mode::Scalar, &src, 2, 2, &mut dst, 4, 0).unwrap_err();
        assert_eq!(err, ResizeError::BadDimensions { width: 4, height: 0 });
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let src = [Rgba8::default(); 4];
        let mut dst = [Rgba8::default(); 4];
        let err = resize(Mode::Scalar, &src, 3, 2, &mut dst, 2, 2).unwrap_err();
        assert_eq!(
            err,
            ResizeError::BufferMismatch {
                len: 4,
                width: 3,
                height: 2
            }
        );
        let err = resize(Mode::Scalar, &src, 2, 2, &mut dst, 5, 1).unwrap_err();
        assert_eq!(
            err,
            ResizeError::BufferMismatch {
                len: 4,
                width: 5,
                height: 1
            }
        );
    }

    #[test]
    fn test_length_check_uses_u64() {
        // On 64-bit targets this is just a big honest mismatch, but the
        // multiplication must not wrap into a false match either way.
        let src = [Rgba8::default(); 1];
        let mut dst = [Rgba8::default(); 1];
        let huge = usize::MAX;
        let err = resize(Mode::Scalar, &src, huge, huge, &mut dst, 1, 1).unwrap_err();
        assert!(matches!(err, ResizeError::BufferMismatch { .. }));
    }

    #[test]
    fn test_identity_2x2() {
        let src = [
            Rgba8::new(255, 0, 0, 255),
            Rgba8::new(0, 255, 0, 255),
            Rgba8::new(0, 0, 255, 255),
            Rgba8::new(255, 255, 255, 0),
        ];
        for mode in Mode::ALL {
            let mut dst = [Rgba8::default(); 4];
            resize(mode, &src, 2, 2, &mut dst, 2, 2).unwrap();
            assert_eq!(dst, src, "identity failed for {}", mode.name());
        }
    }

    #[test]
    fn test_upscale_1x1_replicates() {
        let src = [Rgba8::new(128, 64, 32, 200)];
        for mode in Mode::ALL {
            let mut dst = vec![Rgba8::default(); 16];
            resize(mode, &src, 1, 1, &mut dst, 4, 4).unwrap();
            for (i, p) in dst.iter().enumerate() {
                assert_eq!(*p, src[0], "pixel {} differs for {}", i, mode.name());
            }
        }
    }

    #[test]
    fn test_horizontal_lerp_in_linear_light() {
        // 2x1 black-transparent to white-opaque, resized to 4x1. Source
        // centers sit at s = {-0.25, 0.25, 0.75, 1.25}: the ends clamp
        // onto the border pixels, the interior lerps at 0.25 and 0.75.
        let src = [Rgba8::new(0, 0, 0, 0), Rgba8::new(255, 255, 255, 255)];
        let mut dst = [Rgba8::default(); 4];
        resize(Mode::Scalar, &src, 2, 1, &mut dst, 4, 1).unwrap();

        // Alpha blends linearly: 255 * {0, 0.25, 0.75, 1}, rounded.
        assert_eq!([dst[0].a, dst[1].a, dst[2].a, dst[3].a], [0, 64, 191, 255]);

        // RGB re-encodes the same linear fractions through the sRGB
        // curve, so the codes differ from alpha's.
        let expect = |q: f32| f32_to_srgb8(q * srgb8_to_f32(255));
        assert_eq!(dst[0].r, expect(0.0));
        assert_eq!(dst[1].r, expect(0.25));
        assert_eq!(dst[2].r, expect(0.75));
        assert_eq!(dst[3].r, expect(1.0));
        assert!(dst[1].r > dst[1].a, "sRGB encoding should lift midtones");
    }

    #[test]
    fn test_vertical_alpha_ramp() {
        // The same scenario turned 90 degrees, across a taller output.
        let src = [Rgba8::new(0, 0, 0, 0), Rgba8::new(0, 0, 0, 255)];
        let mut dst = vec![Rgba8::default(); 8];
        resize(Mode::Scalar, &src, 1, 2, &mut dst, 1, 8).unwrap();
        let alphas: Vec<u8> = dst.iter().map(|p| p.a).collect();
        assert_eq!(alphas, [0, 0, 32, 96, 159, 223, 255, 255]);
    }

    #[test]
    fn test_cross_variant_identical_bytes() {
        // 257x129 random input to 900x825, all four kernels byte-equal.
        let (wi, hi) = (257, 129);
        let (wo, ho) = (900, 825);
        let src = xorshift_raster(0xdead_beef, wi * hi);

        let mut reference = vec![Rgba8::default(); wo * ho];
        resize(Mode::Scalar, &src, wi, hi, &mut reference, wo, ho).unwrap();

        for mode in [Mode::ScalarUnsafe, Mode::Vectorized, Mode::Wide] {
            let mut out = vec![Rgba8::default(); wo * ho];
            resize(mode, &src, wi, hi, &mut out, wo, ho).unwrap();
            assert!(
                out == reference,
                "{} diverged from scalar",
                mode.name()
            );
        }
    }

    #[test]
    fn test_tail_columns_match_scalar() {
        // Wo = 901 leaves a 1-column 4-wide tail and a 5-column 8-wide
        // tail; the final columns must still match the scalar kernel.
        let (wi, hi) = (37, 5);
        let (wo, ho) = (901, 3);
        let src = xorshift_raster(0x1234_5678, wi * hi);

        let mut reference = vec![Rgba8::default(); wo * ho];
        resize(Mode::Scalar, &src, wi, hi, &mut reference, wo, ho).unwrap();

        for mode in [Mode::Vectorized, Mode::Wide] {
            let mut out = vec![Rgba8::default(); wo * ho];
            resize(mode, &src, wi, hi, &mut out, wo, ho).unwrap();
            for yo in 0..ho {
                let row = &out[yo * wo..(yo + 1) * wo];
                let expect = &reference[yo * wo..(yo + 1) * wo];
                assert_eq!(
                    &row[wo - 8..],
                    &expect[wo - 8..],
                    "{} tail differs in row {}",
                    mode.name(),
                    yo
                );
                assert_eq!(row, expect, "{} row {} differs", mode.name(), yo);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let src = xorshift_raster(42, 31 * 17);
        let mut a = vec![Rgba8::default(); 57 * 23];
        let mut b = vec![Rgba8::default(); 57 * 23];
        resize(Mode::Wide, &src, 31, 17, &mut a, 57, 23).unwrap();
        resize(Mode::Wide, &src, 31, 17, &mut b, 57, 23).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_downscale_cross_variant() {
        let src = xorshift_raster(7, 129 * 65);
        let mut reference = vec![Rgba8::default(); 40 * 31];
        resize(Mode::Scalar, &src, 129, 65, &mut reference, 40, 31).unwrap();
        for mode in [Mode::ScalarUnsafe, Mode::Vectorized, Mode::Wide] {
            let mut out = vec![Rgba8::default(); 40 * 31];
            resize(mode, &src, 129, 65, &mut out, 40, 31).unwrap();
            assert_eq!(out, reference, "{} diverged on downscale", mode.name());
        }
    }
}
