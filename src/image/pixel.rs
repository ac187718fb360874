//! Packed 24-bit RGB pixel.
//!
//! The four bytes `[0, r, g, b]` are read as a little-endian `u32`, so the
//! reserved zero byte sits in the low 8 bits and blue in the high 8 bits.
//! Bounds detection differentiates these packed values directly, which makes
//! the packing order observable; keep it stable.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pixel(u32);

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Pixel(u32::from_le_bytes([0, r, g, b]))
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Pixel(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.bytes()[1]
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.bytes()[2]
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.bytes()[3]
    }

    /// Truncated mean of the four byte-wise absolute differences.
    ///
    /// The reserved byte is always zero for pixels built through `rgb`, so it
    /// contributes nothing but still counts in the divisor.
    #[inline]
    pub fn mean_abs_diff(self, other: Pixel) -> u32 {
        let a = self.bytes();
        let b = other.bytes();
        let sum: u32 = a
            .iter()
            .zip(b.iter())
            .map(|(&x, &y)| u32::from(x.abs_diff(y)))
            .sum();
        sum / 4
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(rgb: [u8; 3]) -> Self {
        Pixel::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(p: Pixel) -> Self {
        [p.r(), p.g(), p.b()]
    }
}
