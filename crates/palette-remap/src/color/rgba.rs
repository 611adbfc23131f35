//! 8-bit RGBA color

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit-per-channel color with straight (non-premultiplied) alpha.
///
/// Equality and hashing are exact over all four channels, so `Rgba` can be
/// used directly as a hash map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the initial value of every output pixel.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from a byte array `[R, G, B, A]`.
    ///
    /// # Example
    /// ```
    /// use palette_remap::Rgba;
    /// let c = Rgba::from_bytes([1, 2, 3, 4]);
    /// assert_eq!(c.a, 4);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    #[inline]
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgba {
    /// Formats as `R,G,B,A`, the same form accepted by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from `R,G,B,A`.
    ///
    /// Whitespace around each component is ignored. Every component must be
    /// a decimal integer in `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_remap::Rgba;
    ///
    /// let c: Rgba = "0, 128,255 ,64".parse().unwrap();
    /// assert_eq!(c, Rgba::new(0, 128, 255, 64));
    ///
    /// assert!("0,0,0".parse::<Rgba>().is_err());
    /// assert!("0,0,0,256".parse::<Rgba>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(ParseColorError::ComponentCount(parts.len()));
        }

        let mut channels = [0u8; 4];
        for (index, (slot, part)) in channels.iter_mut().zip(&parts).enumerate() {
            *slot = part
                .trim()
                .parse::<u8>()
                .map_err(|source| ParseColorError::InvalidComponent { index, source })?;
        }

        Ok(Self::from_bytes(channels))
    }
}
