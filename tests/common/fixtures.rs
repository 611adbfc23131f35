//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use palette_remap::{PixelBuffer, Rgba};
use paletteswap::rendering::png_io;

/// Named colors used across the tests
pub mod colors {
    use palette_remap::Rgba;

    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const CLEAR: Rgba = Rgba::new(0, 0, 0, 0);
    pub const HALF_RED: Rgba = Rgba::new(255, 0, 0, 128);
}

/// A small sprite: transparent background, red body with a half-transparent
/// red shadow and a green eye.
///
/// ```text
/// . R R .
/// R G R .
/// R R R h
/// ```
pub fn sprite() -> PixelBuffer {
    use colors::*;
    PixelBuffer::new(
        4,
        3,
        vec![
            CLEAR, RED, RED, CLEAR, //
            RED, GREEN, RED, CLEAR, //
            RED, RED, RED, HALF_RED,
        ],
    )
    .unwrap()
}

/// Write `image` as PNG into `dir` and return the path
pub fn write_image(dir: &Path, name: &str, image: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    png_io::write_png(&path, image).unwrap();
    path
}

/// Write a palette text file with one `R,G,B,A` line per color
pub fn write_palette(dir: &Path, name: &str, colors: &[Rgba]) -> PathBuf {
    let text: String = colors.iter().map(|c| format!("{c}\n")).collect();
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}
