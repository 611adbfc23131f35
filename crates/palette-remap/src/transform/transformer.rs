//! Row-parallel remapping of a pixel buffer through a color mapping.

use rayon::prelude::*;

use super::error::TransformError;
use crate::buffer::PixelBuffer;
use crate::color::Rgba;
use crate::palette::ColorMapping;

/// Minimum pixel count before rows are spread across rayon workers.
///
/// Below this the thread hand-off costs more than the lookups themselves.
pub const PARALLEL_THRESHOLD: usize = 65_536;

/// Applies a [`ColorMapping`] to whole images.
///
/// The output is always a fresh buffer of the same dimensions. It starts
/// fully transparent and every pixel is written exactly once; on error the
/// partial output is dropped.
///
/// # Example
///
/// ```
/// use palette_remap::{ColorCatalog, ColorMapping, PixelBuffer, Rgba, Transformer};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let blue = Rgba::opaque(0, 0, 255);
/// let image = PixelBuffer::filled(4, 4, red);
///
/// let mapping = ColorMapping::build(
///     &ColorCatalog::extract(&image),
///     &ColorCatalog::from_colors([blue]),
/// );
///
/// let out = Transformer::new().parallel(false).apply(&image, &mapping).unwrap();
/// assert!(out.pixels().iter().all(|&p| p == blue));
/// ```
#[derive(Debug, Clone)]
pub struct Transformer {
    parallel: bool,
    parallel_threshold: usize,
}

impl Transformer {
    /// Parallel transform enabled, threshold [`PARALLEL_THRESHOLD`].
    pub fn new() -> Self {
        Self {
            parallel: true,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Enable or disable row-parallel processing.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Set the pixel count at which parallel processing kicks in.
    #[inline]
    pub fn parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }

    /// Returns true if an image with `pixels` pixels would be split across
    /// worker threads.
    #[inline]
    pub fn runs_parallel(&self, pixels: usize) -> bool {
        self.parallel && pixels >= self.parallel_threshold
    }

    /// Replace every pixel of `source` by its entry in `mapping`.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnmappedColor`] for the first pixel, in row-major
    /// order, whose color is missing from `mapping`. The reported pixel is
    /// the same whether or not the rows ran in parallel.
    pub fn apply(
        &self,
        source: &PixelBuffer,
        mapping: &ColorMapping,
    ) -> Result<PixelBuffer, TransformError> {
        let (width, height) = source.dimensions();
        let mut output = PixelBuffer::transparent(width, height);
        if source.is_empty() {
            return Ok(output);
        }

        let first_error = if self.runs_parallel(source.pixels().len()) {
            output
                .pixels_mut()
                .par_chunks_mut(width)
                .zip(source.pixels().par_chunks(width))
                .enumerate()
                .find_map_first(|(y, (dst, src))| remap_row(y, src, dst, mapping).err())
        } else {
            output
                .pixels_mut()
                .chunks_mut(width)
                .zip(source.pixels().chunks(width))
                .enumerate()
                .find_map(|(y, (dst, src))| remap_row(y, src, dst, mapping).err())
        };

        match first_error {
            Some(err) => Err(err),
            None => Ok(output),
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Remap `source` with default [`Transformer`] settings.
pub fn apply(source: &PixelBuffer, mapping: &ColorMapping) -> Result<PixelBuffer, TransformError> {
    Transformer::new().apply(source, mapping)
}

#[inline]
fn remap_row(
    y: usize,
    src: &[Rgba],
    dst: &mut [Rgba],
    mapping: &ColorMapping,
) -> Result<(), TransformError> {
    for (x, (out, &color)) in dst.iter_mut().zip(src).enumerate() {
        *out = mapping
            .get(color)
            .ok_or(TransformError::UnmappedColor { x, y, color })?;
    }
    Ok(())
}
