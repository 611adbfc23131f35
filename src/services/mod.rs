pub mod palette_loader;
pub mod swap_pipeline;
pub mod tracing_observer;

pub use palette_loader::{load_palette, PaletteSource};
pub use swap_pipeline::{SwapOutcome, SwapPipeline, SwapRequest};
pub use tracing_observer::TracingObserver;
