//! PixelBuffer struct and raw byte conversions.

use super::error::BufferError;
use crate::color::Rgba;

/// A `width` x `height` grid of colors in row-major order.
///
/// The pixel vector always holds exactly `width * height` entries, so every
/// row has the same length. Zero-sized buffers are allowed.
///
/// # Example
///
/// ```
/// use palette_remap::{PixelBuffer, Rgba};
///
/// let bytes = [255, 0, 0, 255, 0, 255, 0, 255];
/// let image = PixelBuffer::from_rgba8(2, 1, &bytes).unwrap();
///
/// assert_eq!(image.get(1, 0), Some(Rgba::opaque(0, 255, 0)));
/// assert_eq!(image.to_rgba8(), bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Wrap row-major pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, BufferError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(BufferError::DimensionMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// A fully transparent (all channels zero) buffer.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// A 1-pixel-high strip holding `colors` left to right.
    pub fn strip(colors: &[Rgba]) -> Self {
        Self {
            width: colors.len(),
            height: 1,
            pixels: colors.to_vec(),
        }
    }

    /// Build from flat `[R, G, B, A, R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::PartialPixel`] if the length is not a multiple of 4,
    /// [`BufferError::DimensionMismatch`] if the pixel count is wrong.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, BufferError> {
        if bytes.len() % 4 != 0 {
            return Err(BufferError::PartialPixel { len: bytes.len() });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Flatten to `[R, G, B, A, ...]` bytes, `width * height * 4` long.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns true if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable access to all pixels, row-major.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Overwrite the pixel at column `x`, row `y`. Out-of-bounds writes are
    /// ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Iterate over rows, top to bottom.
    ///
    /// Yields nothing for a zero-width buffer.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> + '_ {
        self.pixels.chunks(self.width.max(1))
    }
}
