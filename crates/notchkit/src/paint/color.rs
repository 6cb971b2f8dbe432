use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use super::HexColorError;

/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Hex conversions quantize to 8 bits per channel, so `from_hex(to_hex(c))`
/// is exact only for colors whose channels are multiples of `1/255`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Quantizes each channel to a byte, clamping out-of-range values.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Same color with a different alpha.
    #[inline]
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
    ///
    /// Returns `None` for anything else; use [`str::parse`] for the reason.
    pub fn from_hex(s: &str) -> Option<Self> {
        match s.parse() {
            Ok(c) => Some(c),
            Err(err) => {
                log::debug!("rejected hex color {s:?}: {err}");
                None
            }
        }
    }

    /// Formats as lowercase `#rrggbb`, dropping alpha.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Formats as lowercase `#rrggbbaa`.
    pub fn to_hex_rgba(self) -> String {
        let [r, g, b, a] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[inline]
fn channel_to_u8(v: f32) -> u8 {
    // Clamped to [0, 255] first, so the cast cannot truncate.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix('#').ok_or(HexColorError::MissingHash)?;

        if let Some(bad) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit(bad));
        }
        // All ASCII from here on, so byte length equals digit count.
        if body.len() != 6 && body.len() != 8 {
            return Err(HexColorError::InvalidLength(body.len()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&body[i..i + 2], 16)
                .map_err(|_| HexColorError::InvalidLength(body.len()))
        };
        let a = if body.len() == 8 { byte(6)? } else { 0xff };

        Ok(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_rgba())
    }
}
