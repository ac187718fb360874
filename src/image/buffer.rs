//! Owned RGB pixel buffer in row-major layout (stride == width).
//!
//! Built once per captured frame from a 3-byte RGB source and never mutated
//! afterwards. Provides the stripe accessors used by bounds detection and the
//! fragment comparison used by template matching.

use super::pixel::Pixel;
use super::traits::ImageView;
use crate::error::{Result, ScreenGridError};
use image::{ColorType, DynamicImage, RgbImage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wrap already-packed pixels. `data.len()` must equal `width * height`.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Pixel>) -> Result<Self> {
        let needed = width * height;
        if data.len() != needed {
            return Err(ScreenGridError::InvalidArgument(format!(
                "expected {needed} pixels for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Construct a buffer filled with one color.
    pub fn filled(width: usize, height: usize, color: Pixel) -> Self {
        Self {
            width,
            height,
            data: vec![color; width * height],
        }
    }

    /// Copy a tightly packed byte buffer. Only `ColorType::Rgb8` is accepted.
    pub fn from_raw(width: usize, height: usize, color: ColorType, bytes: &[u8]) -> Result<Self> {
        if color != ColorType::Rgb8 {
            return Err(ScreenGridError::UnsupportedFormat {
                found: format!("{color:?}"),
            });
        }
        let needed = width * height * 3;
        if bytes.len() < needed {
            return Err(ScreenGridError::BufferTooSmall {
                needed,
                got: bytes.len(),
            });
        }
        let data = bytes[..needed]
            .chunks_exact(3)
            .map(|px| Pixel::rgb(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let data = image.pixels().map(|p| Pixel::from(p.0)).collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Accepts only 8-bit RGB images; alpha, gray and 16-bit variants are rejected.
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageRgb8(rgb) => Ok(Self::from_rgb_image(rgb)),
            other => Err(ScreenGridError::UnsupportedFormat {
                found: format!("{:?}", other.color()),
            }),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.data[y * self.width + x]
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// All pixels of row `y`, left to right.
    pub fn horizontal_stripe(&self, y: usize) -> Vec<Pixel> {
        self.row(y).to_vec()
    }

    /// All pixels of column `x`, top to bottom.
    pub fn vertical_stripe(&self, x: usize) -> Vec<Pixel> {
        assert!(x < self.width, "column {x} out of range 0..{}", self.width);
        (0..self.height).map(|y| self.get(x, y)).collect()
    }

    /// Compare `fragment` against the region of `self` starting at `(at_x, at_y)`.
    ///
    /// Exact mode requires identical packed values. Tolerant mode accepts a
    /// pixel pair when the truncated mean byte difference is at most 2. The
    /// fragment must fit inside `self` at the given offset.
    pub fn compare_fragment(
        &self,
        fragment: &PixelBuffer,
        at_x: usize,
        at_y: usize,
        tolerant: bool,
    ) -> bool {
        for y in 0..fragment.height {
            let own = &self.row(at_y + y)[at_x..at_x + fragment.width];
            let other = fragment.row(y);
            let matches = if tolerant {
                own.iter()
                    .zip(other.iter())
                    .all(|(&a, &b)| a.mean_abs_diff(b) <= 2)
            } else {
                own == other
            };
            if !matches {
                return false;
            }
        }
        true
    }

    /// Convert back to an `image` RGB buffer (for debug output).
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut out = RgbImage::new(self.width as u32, self.height as u32);
        for (dst, &src) in out.pixels_mut().zip(self.data.iter()) {
            dst.0 = src.into();
        }
        out
    }
}

impl ImageView for PixelBuffer {
    type Pixel = Pixel;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
