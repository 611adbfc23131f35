//! Progress hook for the swap pipeline.

use crate::buffer::PixelBuffer;
use crate::palette::{ColorCatalog, ColorMapping};

/// Receives notifications as [`PaletteSwapper`](crate::PaletteSwapper)
/// moves through its stages.
///
/// All methods default to doing nothing, so implementors only override the
/// stages they care about. Observers only ever see shared references and
/// cannot influence the result.
pub trait SwapObserver: Send + Sync {
    /// The source image has been scanned.
    fn catalog_built(&self, _catalog: &ColorCatalog) {}

    /// The old-to-new mapping is ready.
    fn mapping_built(&self, _mapping: &ColorMapping) {}

    /// Every pixel has been remapped.
    fn transform_complete(&self, _output: &PixelBuffer) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SwapObserver for NoopObserver {}
