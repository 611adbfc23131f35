//! Positional old-to-new color mapping.

use std::collections::HashMap;

use super::catalog::ColorCatalog;
use crate::color::Rgba;

/// A total mapping from every color of a source catalog to a replacement.
///
/// Built once by [`ColorMapping::build`] and read-only afterwards, so a single
/// mapping can be shared by any number of worker threads.
///
/// # Pairing Rules
///
/// - Source color `i` maps to destination color `i` while both exist.
/// - When the destination is shorter, the remaining source colors map to
///   themselves (identity fallback).
/// - Destination colors past the end of the source are ignored.
///
/// # Example
///
/// ```
/// use palette_remap::{ColorCatalog, ColorMapping, Rgba};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let green = Rgba::opaque(0, 255, 0);
/// let blue = Rgba::opaque(0, 0, 255);
///
/// let source = ColorCatalog::from_colors([red, green]);
/// let dest = ColorCatalog::from_colors([blue]);
/// let mapping = ColorMapping::build(&source, &dest);
///
/// assert_eq!(mapping.get(red), Some(blue));
/// assert_eq!(mapping.get(green), Some(green)); // identity fallback
/// assert_eq!(mapping.fallback_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorMapping {
    // Ordered by source catalog index
    pairs: Vec<(Rgba, Rgba)>,
    lookup: HashMap<Rgba, Rgba>,
    fallback_count: usize,
}

impl ColorMapping {
    /// Pair `source` with `dest` by position.
    ///
    /// The key set of the result is exactly the set of source colors.
    pub fn build(source: &ColorCatalog, dest: &ColorCatalog) -> Self {
        let paired = source.len().min(dest.len());

        let pairs: Vec<(Rgba, Rgba)> = source
            .iter()
            .enumerate()
            .map(|(i, &old)| (old, dest.get(i).unwrap_or(old)))
            .collect();
        let lookup = pairs.iter().copied().collect();

        Self {
            pairs,
            lookup,
            fallback_count: source.len() - paired,
        }
    }

    /// Replacement for `color`, or `None` if it was not in the source catalog.
    #[inline]
    pub fn get(&self, color: Rgba) -> Option<Rgba> {
        self.lookup.get(&color).copied()
    }

    /// Returns true if `color` has an entry.
    #[inline]
    pub fn contains(&self, color: Rgba) -> bool {
        self.lookup.contains_key(&color)
    }

    /// Number of entries (equal to the source catalog length).
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the mapping has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(old, new)` pairs in source catalog order.
    pub fn pairs(&self) -> &[(Rgba, Rgba)] {
        &self.pairs
    }

    /// Number of source colors that kept their own color because the
    /// destination palette ran out.
    #[inline]
    pub fn fallback_count(&self) -> usize {
        self.fallback_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    fn catalog(colors: &[Rgba]) -> ColorCatalog {
        ColorCatalog::from_colors(colors.iter().copied())
    }

    #[test]
    fn test_equal_lengths_pair_by_index() {
        let mapping = ColorMapping::build(&catalog(&[RED, GREEN]), &catalog(&[BLUE, WHITE]));
        assert_eq!(mapping.get(RED), Some(BLUE));
        assert_eq!(mapping.get(GREEN), Some(WHITE));
        assert_eq!(mapping.fallback_count(), 0);
        assert_eq!(mapping.pairs(), &[(RED, BLUE), (GREEN, WHITE)]);
    }

    #[test]
    fn test_short_destination_falls_back_to_identity() {
        let source = catalog(&[RED, GREEN, BLUE]);
        let mapping = ColorMapping::build(&source, &catalog(&[WHITE]));

        assert_eq!(mapping.get(RED), Some(WHITE));
        for &color in &source.colors()[1..] {
            assert_eq!(mapping.get(color), Some(color));
        }
        assert_eq!(mapping.fallback_count(), 2);
    }

    #[test]
    fn test_surplus_destination_is_ignored() {
        let mapping = ColorMapping::build(&catalog(&[RED]), &catalog(&[BLUE, GREEN, WHITE]));
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get(RED), Some(BLUE));
        assert!(!mapping.contains(GREEN));
        assert!(!mapping.contains(WHITE));
    }

    #[test]
    fn test_key_set_equals_source_set() {
        let source = catalog(&[RED, GREEN, BLUE, WHITE]);
        for dest_len in 0..6 {
            let dest: Vec<Rgba> = (0..dest_len).map(|i| Rgba::new(i, i, i, 255)).collect();
            let mapping = ColorMapping::build(&source, &catalog(&dest));

            let keys: HashSet<Rgba> = mapping.pairs().iter().map(|&(old, _)| old).collect();
            let expected: HashSet<Rgba> = source.iter().copied().collect();
            assert_eq!(keys, expected, "dest_len = {dest_len}");
            assert_eq!(mapping.len(), source.len());
        }
    }

    #[test]
    fn test_overlapping_colors_are_reassigned() {
        // RED appears in both palettes but still follows the positional rule
        let mapping = ColorMapping::build(&catalog(&[RED, GREEN]), &catalog(&[GREEN, RED]));
        assert_eq!(mapping.get(RED), Some(GREEN));
        assert_eq!(mapping.get(GREEN), Some(RED));
    }

    #[test]
    fn test_empty_inputs() {
        let empty = ColorCatalog::default();
        assert!(ColorMapping::build(&empty, &empty).is_empty());
        assert!(ColorMapping::build(&empty, &catalog(&[RED])).is_empty());

        let mapping = ColorMapping::build(&catalog(&[RED]), &empty);
        assert_eq!(mapping.get(RED), Some(RED));
        assert_eq!(mapping.fallback_count(), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let source = catalog(&[RED, GREEN, BLUE]);
        let dest = catalog(&[WHITE, RED]);
        let a = ColorMapping::build(&source, &dest);
        let b = ColorMapping::build(&source, &dest);
        assert_eq!(a.pairs(), b.pairs());
    }
}
