//! SIMD target definitions for multiversion dispatch.
//!
//! The hot per-row functions are compiled once per target set; the
//! `#[inline(always)]` codec helpers inline into each clone, so the
//! feature-specialized code paths pay no per-call dispatch inside a row.

/// Primary SIMD targets for the row kernels (x86_64 version).
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[macro_export]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // x86-64-v3 (Haswell 2013+, Zen 2 2019+)
            "x86_64+sse+sse2+sse3+ssse3+sse4.1+sse4.2+popcnt+cmpxchg16b+avx+avx2+bmi1+bmi2+f16c+fma+lzcnt+movbe+xsave+fxsr",
        ))]
        $($item)*
    };
}

/// Primary SIMD targets for the row kernels (aarch64 version).
#[cfg(target_arch = "aarch64")]
#[macro_export]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // aarch64 baseline (all ARM64)
            "aarch64+neon+lse+aes+sha2+crc",
        ))]
        $($item)*
    };
}

/// Primary SIMD targets (fallback - no multiversion).
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
#[macro_export]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        $($item)*
    };
}

// The macro is exported at crate root via #[macro_export].
