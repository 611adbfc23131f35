//! Rectangular RGBA pixel storage.
//!
//! [`PixelBuffer`] is both the input and the output of the remapping
//! pipeline. Pixels are stored row-major, one [`Rgba`](crate::Rgba) each.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
