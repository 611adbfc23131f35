//! Error type for the transform step

use std::fmt;

use crate::color::Rgba;

/// Error returned when a pixel cannot be remapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The pixel's color has no entry in the mapping
    UnmappedColor {
        /// Column of the offending pixel
        x: usize,
        /// Row of the offending pixel
        y: usize,
        /// The color that was looked up
        color: Rgba,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::UnmappedColor { x, y, color } => {
                write!(f, "pixel ({}, {}) has unmapped color {}", x, y, color)
            }
        }
    }
}

impl std::error::Error for TransformError {}
