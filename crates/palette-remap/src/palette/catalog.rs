//! Ordered catalog of the distinct colors in an image.

use std::collections::HashSet;

use crate::buffer::PixelBuffer;
use crate::color::Rgba;

/// The distinct colors of a pixel buffer in first-occurrence order.
///
/// Scanning is row-major (top to bottom, left to right within a row), the
/// same order used everywhere a catalog is built, so two catalogs can be
/// zipped together by index. A catalog never contains the same color twice
/// and cannot be modified after construction.
///
/// # Example
///
/// ```
/// use palette_remap::{ColorCatalog, PixelBuffer, Rgba};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let green = Rgba::opaque(0, 255, 0);
/// let image = PixelBuffer::new(3, 1, vec![green, red, green]).unwrap();
///
/// let catalog = ColorCatalog::extract(&image);
/// assert_eq!(catalog.colors(), &[green, red]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCatalog {
    colors: Vec<Rgba>,
}

impl ColorCatalog {
    /// Scan a buffer and collect its distinct colors.
    ///
    /// An empty buffer yields an empty catalog.
    pub fn extract(buffer: &PixelBuffer) -> Self {
        Self::from_colors(buffer.pixels().iter().copied())
    }

    /// Build a catalog from a literal color sequence.
    ///
    /// Equivalent to extracting from a 1xN strip holding the same colors:
    /// repeated colors keep only their first position.
    pub fn from_colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Rgba>,
    {
        let mut seen = HashSet::new();
        let colors = colors
            .into_iter()
            .filter(|color| seen.insert(*color))
            .collect();
        Self { colors }
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if no colors were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in first-occurrence order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// The color at position `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).copied()
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> {
        self.colors.iter()
    }

    /// Returns true if `color` is part of the catalog.
    pub fn contains(&self, color: Rgba) -> bool {
        self.colors.contains(&color)
    }

    /// Position of `color` in the catalog.
    pub fn position(&self, color: Rgba) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }
}

impl<'a> IntoIterator for &'a ColorCatalog {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl FromIterator<Rgba> for ColorCatalog {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        Self::from_colors(iter)
    }
}
