//! Destination palette loading.
//!
//! A palette comes either from a text file with one `R,G,B,A` color per
//! line, or from the distinct colors of a PNG image.

use std::path::{Path, PathBuf};

use palette_remap::{ColorCatalog, Rgba};

use crate::error::SwapError;
use crate::rendering::png_io;

/// Where a destination palette is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSource {
    /// Line-oriented `R,G,B,A` text file
    Text(PathBuf),
    /// Image whose colors are scanned in row-major order
    Image(PathBuf),
}

impl PaletteSource {
    /// Pick the source kind from the file extension: `.png` (any case) is an
    /// image, everything else is text.
    pub fn from_path(path: &Path) -> Self {
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

        if is_png {
            Self::Image(path.to_path_buf())
        } else {
            Self::Text(path.to_path_buf())
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Text(path) | Self::Image(path) => path,
        }
    }

    /// Read the palette.
    pub fn load(&self) -> Result<ColorCatalog, SwapError> {
        let catalog = match self {
            Self::Text(path) => load_palette_file(path)?,
            Self::Image(path) => ColorCatalog::extract(&png_io::read_png(path)?),
        };
        tracing::info!(
            path = %self.path().display(),
            colors = catalog.len(),
            "Loaded destination palette"
        );
        Ok(catalog)
    }
}

/// Load a palette from `path`, choosing text or image by extension.
pub fn load_palette(path: &Path) -> Result<ColorCatalog, SwapError> {
    PaletteSource::from_path(path).load()
}

/// Read and parse a palette text file.
pub fn load_palette_file(path: &Path) -> Result<ColorCatalog, SwapError> {
    let text = std::fs::read_to_string(path).map_err(|source| SwapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_palette(&text)
}

/// Parse palette text.
///
/// Blank lines and lines starting with `#` are skipped. Every other line
/// must be `R,G,B,A` with each value in `0..=255`. Repeated colors keep their
/// first position.
pub fn parse_palette(text: &str) -> Result<ColorCatalog, SwapError> {
    let mut colors = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let color: Rgba = trimmed
            .parse()
            .map_err(|reason| SwapError::MalformedPaletteEntry {
                line: index + 1,
                reason,
            })?;
        tracing::debug!(line = index + 1, %color, "Read palette color");
        colors.push(color);
    }

    Ok(ColorCatalog::from_colors(colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_remap::{ParseColorError, PixelBuffer};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_in_order() {
        let catalog = parse_palette("0,0,255,255\n255,255,255,255\n").unwrap();
        assert_eq!(
            catalog.colors(),
            &[Rgba::opaque(0, 0, 255), Rgba::opaque(255, 255, 255)]
        );
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let text = "# night palette\n\n10,20,30,255\r\n   \n# accent\n1,2,3,4";
        let catalog = parse_palette(text).unwrap();
        assert_eq!(
            catalog.colors(),
            &[Rgba::opaque(10, 20, 30), Rgba::new(1, 2, 3, 4)]
        );
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let catalog = parse_palette("1,1,1,255\n2,2,2,255\n1,1,1,255\n").unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_parse_reports_line_of_bad_entry() {
        let err = parse_palette("1,2,3,4\n\n5,6,7\n").unwrap_err();
        match err {
            SwapError::MalformedPaletteEntry { line, reason } => {
                assert_eq!(line, 3);
                assert_eq!(reason, ParseColorError::ComponentCount(3));
            }
            other => panic!("Expected MalformedPaletteEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = parse_palette("0,0,0,255\n0,256,0,255\n").unwrap_err();
        assert!(matches!(
            err,
            SwapError::MalformedPaletteEntry {
                line: 2,
                reason: ParseColorError::InvalidComponent { index: 1, .. }
            }
        ));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_palette("").unwrap().is_empty());
    }

    #[test]
    fn test_source_from_extension() {
        assert_eq!(
            PaletteSource::from_path(Path::new("pal/night.PNG")),
            PaletteSource::Image(PathBuf::from("pal/night.PNG"))
        );
        assert_eq!(
            PaletteSource::from_path(Path::new("night.txt")),
            PaletteSource::Text(PathBuf::from("night.txt"))
        );
        assert_eq!(
            PaletteSource::from_path(Path::new("night")),
            PaletteSource::Text(PathBuf::from("night"))
        );
    }

    #[test]
    fn test_load_text_and_image_agree() {
        let dir = tempfile::tempdir().unwrap();
        let colors = [Rgba::opaque(9, 9, 9), Rgba::new(1, 2, 3, 0)];

        let text_path = dir.path().join("palette.txt");
        std::fs::write(&text_path, "9,9,9,255\n1,2,3,0\n").unwrap();

        let image_path = dir.path().join("palette.png");
        png_io::write_png(&image_path, &PixelBuffer::strip(&colors)).unwrap();

        let from_text = load_palette(&text_path).unwrap();
        let from_image = load_palette(&image_path).unwrap();
        assert_eq!(from_text.colors(), &colors);
        assert_eq!(from_text, from_image);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_palette(&dir.path().join("absent.txt")),
            Err(SwapError::Read { .. })
        ));
    }
}
