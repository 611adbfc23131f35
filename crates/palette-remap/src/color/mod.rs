//! Color value type
//!
//! Colors are compared byte-for-byte: two pixels are the same color only if
//! all four channels, alpha included, are identical.
//!
//! # Example
//!
//! ```
//! use palette_remap::Rgba;
//!
//! let red = Rgba::new(255, 0, 0, 255);
//! let parsed: Rgba = "255, 0, 0, 255".parse().unwrap();
//! assert_eq!(red, parsed);
//!
//! // Same RGB, different alpha: a different color
//! assert_ne!(red, Rgba::new(255, 0, 0, 128));
//! ```

mod rgba;

pub use rgba::Rgba;
