//! paletteswap - recolor pixel art onto a new palette
//!
//! Reads a PNG, pairs its colors with a destination palette by position and
//! writes the recolored image. The color engine lives in the
//! `palette-remap` crate; this crate adds file I/O, configuration and the
//! command line. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
