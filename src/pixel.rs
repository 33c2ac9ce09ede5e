//! RGBA pixel storage.
//!
//! A pixel is four bytes: R at the lowest address, then G, B, A. The R, G
//! and B channels are sRGB-encoded; A is linear coverage. Reinterpreted as
//! a little-endian `u32`, byte 0 is R and byte 3 is A.

use bytemuck::{Pod, Zeroable};

/// One 8-bit RGBA pixel, 4 bytes, `#[repr(C)]`.
///
/// Implements [`Pod`], so slices of pixels cast to and from raw byte
/// slices at zero cost; see [`Rgba8::slice_as_bytes`] and
/// [`Rgba8::slice_from_bytes`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    /// Red, sRGB-encoded.
    pub r: u8,
    /// Green, sRGB-encoded.
    pub g: u8,
    /// Blue, sRGB-encoded.
    pub b: u8,
    /// Alpha, linear.
    pub a: u8,
}

impl Rgba8 {
    /// Construct a pixel from its four channel codes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into a `u32` with R in the low byte (little-endian byte order).
    #[inline]
    pub const fn to_u32_le(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Unpack from a `u32` with R in the low byte.
    #[inline]
    pub const fn from_u32_le(word: u32) -> Self {
        let [r, g, b, a] = word.to_le_bytes();
        Self { r, g, b, a }
    }

    /// View a pixel slice as its underlying bytes.
    #[inline]
    pub fn slice_as_bytes(pixels: &[Rgba8]) -> &[u8] {
        bytemuck::cast_slice(pixels)
    }

    /// View a byte slice as pixels. Panics if the length is not a
    /// multiple of 4.
    #[inline]
    pub fn slice_from_bytes(bytes: &[u8]) -> &[Rgba8] {
        bytemuck::cast_slice(bytes)
    }
}
