//! Assertion helpers for tests.

use std::path::Path;

use palette_remap::PixelBuffer;
use paletteswap::rendering::png_io;
use pretty_assertions::assert_eq;

/// Read a PNG and assert it matches `expected` pixel for pixel
pub fn assert_png_eq(path: &Path, expected: &PixelBuffer) {
    assert!(path.exists(), "Expected {} to exist", path.display());
    let actual = png_io::read_png(path).unwrap();
    assert_eq!(
        actual.dimensions(),
        expected.dimensions(),
        "Dimensions of {} differ",
        path.display()
    );
    assert_eq!(actual.pixels(), expected.pixels());
}
