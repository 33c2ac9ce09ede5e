//! Fast bilinear image resampling in linear light.
//!
//! Resizes 8-bit RGBA rasters by decoding sRGB channels to linear floats,
//! blending there, and re-encoding through Rygorous' fast table codec.
//! Alpha is treated as linear coverage throughout. Sampling uses
//! pixel-center geometry with texture-clamp addressing.
//!
//! Four interchangeable kernels render the rows: scalar, unchecked
//! scalar (auto-vectorization target), explicit 4-wide and explicit
//! 8-wide SIMD. All four produce byte-identical output rasters, so they can
//! be swapped and benchmarked against each other freely.
//!
//! # Module Organization
//!
//! - [`pixel`] - The [`Rgba8`] pixel type and byte-slice casts
//! - [`codec`] - Scalar sRGB/unorm codec (decode tables + fast encoder)
//! - [`simd`] - Lane-wise codec forms, bit-identical to the scalar ones
//! - [`sampling`] - Output-to-input coordinate mapping with edge clamp
//! - [`harness`] - Warm-up + mean-of-iterations timing
//!
//! The kernels themselves are internal; select one through [`Mode`].
//!
//! # Quick Start
//!
//! ```rust
//! use linear_resize::{resize_vectorized, Rgba8};
//!
//! let src = vec![Rgba8::new(200, 100, 50, 255); 8 * 8];
//! let mut dst = vec![Rgba8::default(); 16 * 16];
//!
//! resize_vectorized(&src, 8, 8, &mut dst, 16, 16).unwrap();
//! assert_eq!(dst[0], Rgba8::new(200, 100, 50, 255));
//! ```
//!
//! # Comparing Kernels
//!
//! ```rust
//! use linear_resize::{benchmark, Mode, Rgba8};
//!
//! let src = vec![Rgba8::new(128, 128, 128, 255); 64 * 64];
//! let mut dst = vec![Rgba8::default(); 128 * 128];
//!
//! for mode in Mode::ALL {
//!     let ms = benchmark(mode, &src, 64, 64, &mut dst, 128, 128, 3).unwrap();
//!     assert!(ms.is_finite());
//! }
//! ```
//!
//! # Guarantees
//!
//! - **Cross-kernel equality**: all four modes produce the same bytes
//!   for any valid input.
//! - **Identity**: resizing to the same dimensions reproduces the input
//!   (the decode and encode tables round-trip every 8-bit code).
//! - **NaN safety**: any NaN reaching an encoder becomes code 0.
//! - **Determinism**: output is a pure function of input and dimensions;
//!   rows are data-parallel with no shared state.

#![warn(missing_docs)]

// ============================================================================
// Public modules
// ============================================================================

/// Scalar conversions between 8-bit channel codes and linear floats.
pub mod codec;

/// Timing harness for comparing kernels.
pub mod harness;

/// RGBA pixel storage.
pub mod pixel;

/// Sampling geometry with edge-clamp addressing.
pub mod sampling;

/// SIMD forms of the channel codec.
pub mod simd;

// ============================================================================
// Internal modules
// ============================================================================

mod dispatch;
mod kernel;
mod tables;

// SIMD target macros (exported at crate root via #[macro_export]).
mod targets;

// ============================================================================
// Re-exports
// ============================================================================

pub use dispatch::{
    resize, resize_scalar, resize_scalar_unsafe, resize_vectorized, resize_wide, Mode,
    ResizeError,
};
pub use harness::{
    benchmark, benchmark_scalar, benchmark_scalar_unsafe, benchmark_vectorized, benchmark_wide,
};
pub use pixel::Rgba8;

// ============================================================================
// Tests
// ============================================================================
