use std::path::PathBuf;

use palette_remap::{BufferError, ParseColorError, RemapError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Malformed palette entry on line {line}: {reason}")]
    MalformedPaletteEntry { line: usize, reason: ParseColorError },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedPng(String),

    #[error("Unsupported image dimensions: {width}x{height}")]
    ImageDimensions { width: usize, height: usize },

    #[error("No destination palette given")]
    MissingPalette,

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Remap(#[from] RemapError),
}
