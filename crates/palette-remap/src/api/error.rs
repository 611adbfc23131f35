//! Unified error type for the palette-remap public API.

use crate::buffer::BufferError;
use crate::palette::ParseColorError;
use crate::transform::TransformError;
use std::fmt;

/// Unified error type for the palette-remap public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use palette_remap::{ColorCatalog, RemapError, Rgba};
///
/// fn palette(lines: &[&str]) -> Result<ColorCatalog, RemapError> {
///     let colors = lines
///         .iter()
///         .map(|line| line.parse::<Rgba>())
///         .collect::<Result<Vec<_>, _>>()?;
///     Ok(ColorCatalog::from_colors(colors))
/// }
///
/// assert_eq!(palette(&["0,0,0,255", "255,255,255,255"]).unwrap().len(), 2);
/// assert!(palette(&["0,0,0"]).is_err());
/// ```
#[derive(Debug)]
pub enum RemapError {
    /// Color parsing error
    ParseColor(ParseColorError),
    /// Pixel data does not match the declared dimensions
    Buffer(BufferError),
    /// A pixel color is missing from the mapping
    Transform(TransformError),
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapError::ParseColor(err) => write!(f, "color parse error: {}", err),
            RemapError::Buffer(err) => write!(f, "buffer error: {}", err),
            RemapError::Transform(err) => write!(f, "transform error: {}", err),
        }
    }
}

impl std::error::Error for RemapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemapError::ParseColor(err) => Some(err),
            RemapError::Buffer(err) => Some(err),
            RemapError::Transform(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for RemapError {
    fn from(err: ParseColorError) -> Self {
        RemapError::ParseColor(err)
    }
}

impl From<BufferError> for RemapError {
    fn from(err: BufferError) -> Self {
        RemapError::Buffer(err)
    }
}

impl From<TransformError> for RemapError {
    fn from(err: TransformError) -> Self {
        RemapError::Transform(err)
    }
}
