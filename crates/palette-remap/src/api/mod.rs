//! Public API for the palette-remap crate.
//!
//! This module provides the high-level API: the [`PaletteSwapper`] builder,
//! the [`SwapObserver`] progress hook and the [`RemapError`] unified error
//! type.

mod builder;
mod error;
mod observer;

pub use builder::{PaletteSwapper, SwapOutput};
pub use error::RemapError;
pub use observer::{NoopObserver, SwapObserver};
