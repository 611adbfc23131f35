//! Error types for palette operations

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing `R,G,B,A` color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string did not split into exactly four comma-separated components
    ComponentCount(usize),
    /// A component is not an integer in `0..=255`
    InvalidComponent {
        /// Zero-based component position (0 = red, 3 = alpha)
        index: usize,
        /// Underlying integer parse failure
        source: ParseIntError,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::ComponentCount(count) => {
                write!(f, "expected 4 comma-separated components, found {}", count)
            }
            ParseColorError::InvalidComponent { index, source } => {
                let name = ["red", "green", "blue", "alpha"]
                    .get(*index)
                    .copied()
                    .unwrap_or("unknown");
                write!(f, "{} component is not in 0..=255: {}", name, source)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidComponent { source, .. } => Some(source),
            _ => None,
        }
    }
}
