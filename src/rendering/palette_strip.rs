//! Palette strip rendering.
//!
//! A strip shows a color sequence as equal-width vertical bands, left to
//! right in palette order. It is meant for eyeballing a palette, not for
//! feeding back into the mapping.

use palette_remap::{PixelBuffer, Rgba};

/// Default strip size in pixels.
pub const DEFAULT_STRIP_WIDTH: usize = 300;
pub const DEFAULT_STRIP_HEIGHT: usize = 200;

/// Render `colors` as a `width` x `height` strip.
///
/// Each band is `width / colors.len()` pixels wide (rounded down); columns
/// left over on the right stay transparent. When there are more colors than
/// columns the strip is widened to one column per color.
pub fn render_strip(colors: &[Rgba], width: usize, height: usize) -> PixelBuffer {
    let width = width.max(colors.len());
    let mut strip = PixelBuffer::transparent(width, height);
    if colors.is_empty() {
        return strip;
    }

    let band = width / colors.len();
    for (i, &color) in colors.iter().enumerate() {
        let start = i * band;
        for y in 0..height {
            for x in start..start + band {
                strip.set(x, y, color);
            }
        }
    }
    strip
}
