//! Timing harness for comparing kernels.
//!
//! Runs a fixed warm-up, then times whole-image resizes on a monotonic
//! clock and reports the mean in milliseconds. The warm-up count and the
//! mean-of-iterations reporting are part of the contract; they shape the
//! numbers users compare across kernels. The caller's output buffer is
//! reused for every run; nothing allocates inside the loop.

use std::time::Instant;

use crate::dispatch::{resize, validate, Mode, ResizeError};
use crate::pixel::Rgba8;

/// Untimed resizes executed before measurement starts.
const WARMUP_RUNS: u32 = 10;

/// Time `iters` full-image resizes with the kernel selected by `mode`
/// and return the mean elapsed milliseconds.
///
/// Fails with [`ResizeError::BadIterations`] when `iters` is zero, and
/// with the usual validation errors for bad buffers or dimensions.
#[allow(clippy::too_many_arguments)]
pub fn benchmark(
    mode: Mode,
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
    iters: u32,
) -> Result<f64, ResizeError> {
    if iters < 1 {
        return Err(ResizeError::BadIterations);
    }
    validate(src.len(), src_width, src_height)?;
    validate(dst.len(), dst_width, dst_height)?;

    for _ in 0..WARMUP_RUNS {
        resize(mode, src, src_width, src_height, dst, dst_width, dst_height)?;
    }

    let mut total_ms = 0.0f64;
    for _ in 0..iters {
        let start = Instant::now();
        resize(mode, src, src_width, src_height, dst, dst_width, dst_height)?;
        total_ms += start.elapsed().as_secs_f64() * 1e3;
    }

    let mean = total_ms / f64::from(iters);
    log::trace!(
        "{}: {}x{} -> {}x{}, {} iters, mean {:.3} ms",
        mode.name(),
        src_width,
        src_height,
        dst_width,
        dst_height,
        iters,
        mean
    );
    Ok(mean)
}

/// [`benchmark`] with [`Mode::Scalar`].
#[allow(clippy::too_many_arguments)]
pub fn benchmark_scalar(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
    iters: u32,
) -> Result<f64, ResizeError> {
    benchmark(
        Mode::Scalar,
        src,
        src_width,
        src_height,
        dst,
        dst_width,
        dst_height,
        iters,
    )
}

/// [`benchmark`] with [`Mode::ScalarUnsafe`].
#[allow(clippy::too_many_arguments)]
pub fn benchmark_scalar_unsafe(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
    iters: u32,
) -> Result<f64, ResizeError> {
    benchmark(
        Mode::ScalarUnsafe,
        src,
        src_width,
        src_height,
        dst,
        dst_width,
        dst_height,
        iters,
    )
}

/// [`benchmark`] with [`Mode::Vectorized`].
#[allow(clippy::too_many_arguments)]
pub fn benchmark_vectorized(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
    iters: u32,
) -> Result<f64, ResizeError> {
    benchmark(
        Mode::Vectorized,
        src,
        src_width,
        src_height,
        dst,
        dst_width,
        dst_height,
        iters,
    )
}

/// [`benchmark`] with [`Mode::Wide`].
#[allow(clippy::too_many_arguments)]
pub fn benchmark_wide(
    src: &[Rgba8],
    src_width: usize,
    src_height: usize,
    dst: &mut [Rgba8],
    dst_width: usize,
    dst_height: usize,
    iters: u32,
) -> Result<f64, ResizeError> {
    benchmark(
        Mode::Wide,
        src,
        src_width,
        src_height,
        dst,
        dst_width,
        dst_height,
        iters,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_iterations() {
        let src = [Rgba8::default(); 4];
        let mut dst = [Rgba8::default(); 4];
        let err = benchmark(Mode::Scalar, &src, 2, 2, &mut dst, 2, 2, 0).unwrap_err();
        assert_eq!(err, ResizeError::BadIterations);
    }

    #[test]
    fn test_validates_before_warmup() {
        let src = [Rgba8::default(); 4];
        let mut dst = [Rgba8::default(); 3];
        let err = benchmark(Mode::Scalar, &src, 2, 2, &mut dst, 2, 2, 1).unwrap_err();
        assert!(matches!(err, ResizeError::BufferMismatch { .. }));
    }

    #[test]
    fn test_reports_mean_and_fills_output() {
        let src = [
            Rgba8::new(10, 20, 30, 40),
            Rgba8::new(50, 60, 70, 80),
            Rgba8::new(90, 100, 110, 120),
            Rgba8::new(130, 140, 150, 160),
        ];
        let mut timed = vec![Rgba8::default(); 9 * 7];
        let mean = benchmark(Mode::Scalar, &src, 2, 2, &mut timed, 9, 7, 3).unwrap();
        assert!(mean >= 0.0 && mean.is_finite());

        // The timed buffer ends up holding an ordinary resize result.
        let mut direct = vec![Rgba8::default(); 9 * 7];
        resize(Mode::Scalar, &src, 2, 2, &mut direct, 9, 7).unwrap();
        assert_eq!(timed, direct);
    }
}
