//! Error type for pixel buffer construction

use std::fmt;

/// Error returned when pixel data does not fit the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Pixel count is not `width * height`
    DimensionMismatch {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
        /// Number of pixels actually supplied
        actual: usize,
    },
    /// Raw byte length is not a multiple of 4 (one RGBA pixel)
    PartialPixel {
        /// Length of the byte slice
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::DimensionMismatch {
                width,
                height,
                actual,
            } => match width.checked_mul(*height) {
                Some(expected) => write!(
                    f,
                    "dimension mismatch: {}x{} needs {} pixels, got {}",
                    width, height, expected, actual
                ),
                None => write!(
                    f,
                    "dimension mismatch: {}x{} overflows usize, got {} pixels",
                    width, height, actual
                ),
            },
            BufferError::PartialPixel { len } => {
                write!(f, "RGBA data length {} is not a multiple of 4", len)
            }
        }
    }
}

impl std::error::Error for BufferError {}
