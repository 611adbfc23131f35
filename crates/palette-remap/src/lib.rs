//! palette-remap: exact palette swapping for RGBA images
//!
//! This library replaces every color of an image with the color at the same
//! position in another palette. It is meant for pixel art and other images
//! with a small, fixed set of colors: matching is exact, there is no
//! nearest-color search and no dithering.
//!
//! # Quick Start
//!
//! The [`PaletteSwapper`] builder is the primary entry point:
//!
//! ```
//! use palette_remap::{ColorCatalog, PaletteSwapper, PixelBuffer, Rgba};
//!
//! let red = Rgba::opaque(255, 0, 0);
//! let green = Rgba::opaque(0, 255, 0);
//! let blue = Rgba::opaque(0, 0, 255);
//!
//! let image = PixelBuffer::new(2, 1, vec![red, green]).unwrap();
//! let swapper = PaletteSwapper::new(ColorCatalog::from_colors([blue]));
//!
//! let result = swapper.swap(&image).unwrap();
//! assert_eq!(result.image.pixels(), &[blue, green]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source PixelBuffer
//!     |
//!     v
//! ColorCatalog::extract      distinct colors, row-major first-occurrence order
//!     |
//!     v
//! ColorMapping::build        source[i] -> dest[i], identity past end of dest
//!     |
//!     v
//! Transformer::apply         per-pixel lookup, rows split across rayon workers
//!     |
//!     v
//! new PixelBuffer            same dimensions, independent memory
//! ```
//!
//! The three stages are also usable on their own. A mapping built from one
//! image may be applied to another; any pixel whose color the mapping does
//! not know makes [`Transformer::apply`] fail with
//! [`TransformError::UnmappedColor`] instead of silently keeping the pixel.
//!
//! # Palette Order
//!
//! Both palettes are zipped by index, so their order matters. Catalogs are
//! always built by the same row-major scan, which makes two images drawn with
//! the same layout of colors (for example two palette strips) line up.
//!
//! # Alpha
//!
//! Alpha is an ordinary channel. `(255, 0, 0, 255)` and `(255, 0, 0, 128)` are
//! different colors and can be mapped to different replacements.

pub mod api;
pub mod buffer;
pub mod color;
pub mod palette;
pub mod transform;


pub use api::{NoopObserver, PaletteSwapper, RemapError, SwapObserver, SwapOutput};
pub use buffer::{BufferError, PixelBuffer};
pub use color::Rgba;
pub use palette::{ColorCatalog, ColorMapping, ParseColorError};
pub use transform::{apply, TransformError, Transformer, PARALLEL_THRESHOLD};
