//! PNG decoding and encoding for pixel buffers.
//!
//! Every PNG color type and bit depth is normalized to 8-bit RGBA on the way
//! in. Output is always 8-bit RGBA. Only the first frame of an animated PNG
//! is read.

use std::io::Cursor;
use std::path::Path;

use palette_remap::{PixelBuffer, Rgba};

use crate::error::SwapError;

/// Decode PNG bytes into a pixel buffer.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, SwapError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    // Palette -> RGB(A), low bit depths -> 8 bit, tRNS -> alpha, 16 bit -> 8 bit
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(SwapError::UnsupportedPng(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let width = info.width as usize;
    let height = info.height as usize;
    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");

    let pixels: Vec<Rgba> = match info.color_type {
        png::ColorType::Rgba => return Ok(PixelBuffer::from_rgba8(width, height, data)?),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|px| Rgba::opaque(px[0], px[1], px[2]))
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|px| Rgba::new(px[0], px[0], px[0], px[1]))
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Rgba::opaque(v, v, v)).collect(),
        png::ColorType::Indexed => {
            return Err(SwapError::UnsupportedPng(
                "indexed data was not expanded".to_string(),
            ))
        }
    };

    Ok(PixelBuffer::new(width, height, pixels)?)
}

/// Encode a pixel buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, SwapError> {
    let (width, height) = png_dimensions(buffer)?;

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&buffer.to_rgba8())?;
        writer.finish()?;
    }
    Ok(out)
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<PixelBuffer, SwapError> {
    let bytes = std::fs::read(path).map_err(|source| SwapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(&bytes)
}

/// Encode `buffer` and write it to `path`.
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), SwapError> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, &bytes).map_err(|source| SwapError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}

/// PNG needs non-zero dimensions that fit in `u32`.
fn png_dimensions(buffer: &PixelBuffer) -> Result<(u32, u32), SwapError> {
    let (width, height) = buffer.dimensions();
    let invalid = || SwapError::ImageDimensions { width, height };

    if width == 0 || height == 0 {
        return Err(invalid());
    }
    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;
    Ok((w, h))
}
