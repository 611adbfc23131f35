//! PaletteSwapper builder -- the primary entry point for the crate.
//!
//! [`PaletteSwapper`] runs the whole pipeline (catalog, mapping, transform)
//! against a fixed destination palette.

use std::sync::Arc;

use super::error::RemapError;
use super::observer::{NoopObserver, SwapObserver};
use crate::buffer::PixelBuffer;
use crate::color::Rgba;
use crate::palette::{ColorCatalog, ColorMapping};
use crate::transform::Transformer;

/// Result of a successful swap.
#[derive(Debug, Clone)]
pub struct SwapOutput {
    /// The remapped image
    pub image: PixelBuffer,
    /// Distinct colors of the source image, in scan order
    pub source_catalog: ColorCatalog,
    /// The mapping that produced `image`
    pub mapping: ColorMapping,
}

/// Swaps images onto a destination palette.
///
/// # Design
///
/// - Constructor requires the destination [`ColorCatalog`]
/// - Configuration methods consume and return `self`
/// - [`swap()`](Self::swap) takes `&self`, so one swapper serves any number
///   of images
///
/// # Example
///
/// ```
/// use palette_remap::{ColorCatalog, PaletteSwapper, PixelBuffer, Rgba};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let green = Rgba::opaque(0, 255, 0);
/// let blue = Rgba::opaque(0, 0, 255);
///
/// let image = PixelBuffer::new(2, 1, vec![red, green]).unwrap();
/// let swapper = PaletteSwapper::new(ColorCatalog::from_colors([blue]));
///
/// let out = swapper.swap(&image).unwrap();
/// assert_eq!(out.image.pixels(), &[blue, green]);
/// assert_eq!(out.mapping.fallback_count(), 1);
/// ```
pub struct PaletteSwapper {
    destination: ColorCatalog,
    transformer: Transformer,
    observer: Arc<dyn SwapObserver>,
}

impl PaletteSwapper {
    /// Create a swapper targeting `destination`.
    ///
    /// Defaults: parallel transform with the standard threshold, no observer.
    pub fn new(destination: ColorCatalog) -> Self {
        Self {
            destination,
            transformer: Transformer::new(),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Create a swapper from `R,G,B,A` color strings.
    ///
    /// Duplicates collapse onto their first occurrence, as for any catalog.
    ///
    /// # Errors
    ///
    /// [`RemapError::ParseColor`] for the first string that is not a color.
    pub fn from_strs<I, S>(colors: I) -> Result<Self, RemapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = colors
            .into_iter()
            .map(|c| c.as_ref().parse::<Rgba>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(ColorCatalog::from_colors(colors)))
    }

    /// Enable or disable the row-parallel transform.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.transformer = self.transformer.parallel(enabled);
        self
    }

    /// Pixel count at which the transform goes parallel.
    #[inline]
    pub fn parallel_threshold(mut self, pixels: usize) -> Self {
        self.transformer = self.transformer.parallel_threshold(pixels);
        self
    }

    /// Attach a progress observer.
    pub fn observer(mut self, observer: Arc<dyn SwapObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The destination palette.
    #[inline]
    pub fn destination(&self) -> &ColorCatalog {
        &self.destination
    }

    /// Build the mapping from `image`'s own colors to the destination.
    pub fn mapping_for(&self, image: &PixelBuffer) -> (ColorCatalog, ColorMapping) {
        let catalog = ColorCatalog::extract(image);
        self.observer.catalog_built(&catalog);

        let mapping = ColorMapping::build(&catalog, &self.destination);
        self.observer.mapping_built(&mapping);

        (catalog, mapping)
    }

    /// Swap `image` onto the destination palette.
    ///
    /// The mapping is derived from `image` itself, so every pixel has an
    /// entry and the transform cannot hit an unmapped color.
    pub fn swap(&self, image: &PixelBuffer) -> Result<SwapOutput, RemapError> {
        let (source_catalog, mapping) = self.mapping_for(image);
        let output = self.apply(image, &mapping)?;

        Ok(SwapOutput {
            image: output,
            source_catalog,
            mapping,
        })
    }

    /// Swap raw `[R, G, B, A, ...]` bytes laid out row-major.
    ///
    /// # Errors
    ///
    /// [`RemapError::Buffer`] if `bytes` does not hold exactly
    /// `width * height` pixels.
    pub fn swap_rgba8(
        &self,
        width: usize,
        height: usize,
        bytes: &[u8],
    ) -> Result<SwapOutput, RemapError> {
        let image = PixelBuffer::from_rgba8(width, height, bytes)?;
        self.swap(&image)
    }

    /// Apply a previously built mapping to `image`.
    ///
    /// Useful when one mapping is reused across several images sharing a
    /// palette. Fails with [`TransformError::UnmappedColor`](crate::TransformError)
    /// if `image` contains a color the mapping does not know.
    pub fn apply(
        &self,
        image: &PixelBuffer,
        mapping: &ColorMapping,
    ) -> Result<PixelBuffer, RemapError> {
        let output = self.transformer.apply(image, mapping)?;
        self.observer.transform_complete(&output);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferError;
    use crate::palette::ParseColorError;
    use crate::transform::TransformError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    #[derive(Default)]
    struct Recorder {
        stages: Mutex<Vec<&'static str>>,
        catalog_len: AtomicUsize,
    }

    impl SwapObserver for Recorder {
        fn catalog_built(&self, catalog: &ColorCatalog) {
            self.catalog_len.store(catalog.len(), Ordering::SeqCst);
            self.stages.lock().unwrap().push("catalog");
        }

        fn mapping_built(&self, _mapping: &ColorMapping) {
            self.stages.lock().unwrap().push("mapping");
        }

        fn transform_complete(&self, _output: &PixelBuffer) {
            self.stages.lock().unwrap().push("transform");
        }
    }

    #[test]
    fn test_swap_scenario() {
        let image = PixelBuffer::new(2, 1, vec![RED, GREEN]).unwrap();
        let out = PaletteSwapper::new(ColorCatalog::from_colors([BLUE]))
            .swap(&image)
            .unwrap();

        assert_eq!(out.source_catalog.colors(), &[RED, GREEN]);
        assert_eq!(out.mapping.pairs(), &[(RED, BLUE), (GREEN, GREEN)]);
        assert_eq!(out.image.pixels(), &[BLUE, GREEN]);
    }

    #[test]
    fn test_observer_sees_stages_in_order() {
        let recorder = Arc::new(Recorder::default());
        let swapper =
            PaletteSwapper::new(ColorCatalog::from_colors([BLUE])).observer(recorder.clone());

        let image = PixelBuffer::new(3, 1, vec![RED, GREEN, RED]).unwrap();
        swapper.swap(&image).unwrap();

        assert_eq!(
            *recorder.stages.lock().unwrap(),
            vec!["catalog", "mapping", "transform"]
        );
        assert_eq!(recorder.catalog_len.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failed_apply_skips_transform_notification() {
        let recorder = Arc::new(Recorder::default());
        let swapper =
            PaletteSwapper::new(ColorCatalog::from_colors([BLUE])).observer(recorder.clone());

        let (_, mapping) = swapper.mapping_for(&PixelBuffer::filled(1, 1, RED));
        let err = swapper
            .apply(&PixelBuffer::filled(2, 2, GREEN), &mapping)
            .unwrap_err();

        assert!(matches!(
            err,
            RemapError::Transform(TransformError::UnmappedColor { x: 0, y: 0, .. })
        ));
        assert!(!recorder.stages.lock().unwrap().contains(&"transform"));
    }

    #[test]
    fn test_swapper_is_reusable() {
        let swapper = PaletteSwapper::new(ColorCatalog::from_colors([BLUE, RED])).parallel(false);
        let a = swapper.swap(&PixelBuffer::filled(2, 2, GREEN)).unwrap();
        let b = swapper
            .swap(&PixelBuffer::new(2, 1, vec![RED, GREEN]).unwrap())
            .unwrap();

        assert!(a.image.pixels().iter().all(|&p| p == BLUE));
        assert_eq!(b.image.pixels(), &[BLUE, RED]);
        assert_eq!(swapper.destination().len(), 2);
    }

    #[test]
    fn test_from_strs_builds_destination() {
        let swapper =
            PaletteSwapper::from_strs(["0,0,255,255", " 255, 0, 0, 255", "0,0,255,255"]).unwrap();
        assert_eq!(swapper.destination().colors(), &[BLUE, RED]);
    }

    #[test]
    fn test_from_strs_reports_bad_color() {
        let err = PaletteSwapper::from_strs(["0,0,255,255", "1,2,3"])
            .err()
            .unwrap();
        assert!(matches!(
            err,
            RemapError::ParseColor(ParseColorError::ComponentCount(3))
        ));
    }

    #[test]
    fn test_swap_rgba8() {
        let swapper = PaletteSwapper::new(ColorCatalog::from_colors([BLUE]));
        let out = swapper
            .swap_rgba8(2, 1, &[255, 0, 0, 255, 0, 255, 0, 255])
            .unwrap();
        assert_eq!(out.image.pixels(), &[BLUE, GREEN]);
    }

    #[test]
    fn test_swap_rgba8_rejects_wrong_length() {
        let swapper = PaletteSwapper::new(ColorCatalog::from_colors([BLUE]));

        let err = swapper.swap_rgba8(2, 2, &[0; 8]).unwrap_err();
        assert!(matches!(
            err,
            RemapError::Buffer(BufferError::DimensionMismatch {
                width: 2,
                height: 2,
                actual: 2
            })
        ));

        let err = swapper.swap_rgba8(1, 1, &[0; 3]).unwrap_err();
        assert!(matches!(
            err,
            RemapError::Buffer(BufferError::PartialPixel { len: 3 })
        ));
    }
}
