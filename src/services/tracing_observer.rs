use palette_remap::{ColorCatalog, ColorMapping, PixelBuffer, SwapObserver};

/// Reports swap progress as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SwapObserver for TracingObserver {
    fn catalog_built(&self, catalog: &ColorCatalog) {
        tracing::info!(colors = catalog.len(), "Built source catalog");
    }

    fn mapping_built(&self, mapping: &ColorMapping) {
        tracing::info!(
            entries = mapping.len(),
            kept = mapping.fallback_count(),
            "Built color mapping"
        );
        for (old, new) in mapping.pairs() {
            if old == new {
                tracing::debug!(color = %old, "Keeping color");
            } else {
                tracing::debug!(from = %old, to = %new, "Swapping color");
            }
        }
    }

    fn transform_complete(&self, output: &PixelBuffer) {
        tracing::info!(
            width = output.width(),
            height = output.height(),
            "Transform complete"
        );
    }
}
