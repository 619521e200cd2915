//! Color type with 8-bit channels and alpha support

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{RasterError, Result};

/// Reduce a channel value into `[0, 255]` with Euclidean remainder.
///
/// Wraps instead of clamping: 256 -> 0, 300 -> 44, -1 -> 255.
/// Fractional values are floored after reduction.
#[inline]
fn wrap_channel(value: f64) -> u8 {
    let reduced = value.rem_euclid(256.0).floor();
    // rem_euclid can round up to exactly 256.0 for tiny negative inputs
    if reduced >= 256.0 {
        0
    } else {
        reduced as u8
    }
}

#[inline]
const fn hex_nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

/// RGBA color with 8-bit channels (0 - 255)
///
/// Immutable: every transformation returns a new color. Channels are read
/// through accessors and can't be set after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Create a color from arbitrary numeric channel values.
    ///
    /// Each channel is normalized with `value mod 256` (negative-safe), so
    /// out-of-range inputs wrap around rather than saturate. Fails with
    /// [`RasterError::InvalidComponent`] if any channel is NaN or infinite.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        let checked = |channel: &'static str, value: f64| -> Result<u8> {
            if value.is_finite() {
                Ok(wrap_channel(value))
            } else {
                Err(RasterError::InvalidComponent { channel, value })
            }
        };

        Ok(Self {
            r: checked("r", r)?,
            g: checked("g", g)?,
            b: checked("b", b)?,
            a: checked("a", a)?,
        })
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha = 255)
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Channels in R, G, B, A order
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn r(&self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn g(&self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn b(&self) -> u8 {
        self.b
    }

    #[inline]
    pub const fn a(&self) -> u8 {
        self.a
    }

    /// Same color with a different alpha channel
    #[must_use]
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Parse a hex color string.
    ///
    /// Accepts an optional leading `#` followed by 3 (`RGB`, each digit
    /// doubled), 6 (`RRGGBB`) or 8 (`RRGGBBAA`) hex digits, case-insensitive.
    /// Alpha defaults to 255 when omitted.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RasterError::invalid_hex(hex));
        }

        let bytes = digits.as_bytes();
        let byte_at = |i: usize| (hex_nibble(bytes[i]) << 4) | hex_nibble(bytes[i + 1]);

        match bytes.len() {
            3 => {
                let short = |i: usize| hex_nibble(bytes[i]) * 17;
                Ok(Self::rgb(short(0), short(1), short(2)))
            }
            6 => Ok(Self::rgb(byte_at(0), byte_at(2), byte_at(4))),
            8 => Ok(Self::rgba(byte_at(0), byte_at(2), byte_at(4), byte_at(6))),
            _ => Err(RasterError::invalid_hex(hex)),
        }
    }

    /// `#rrggbb`, alpha dropped
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbbaa`
    pub fn to_hex8(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Porter-Duff "over": composite `top` onto `bottom`.
    ///
    /// Works on straight (non-premultiplied) alpha in sRGB space. Rounds half
    /// away from zero. Two fully transparent inputs give [`Color::TRANSPARENT`].
    ///
    /// <https://keithp.com/~keithp/porterduff/p253-porter.pdf>
    #[must_use]
    pub fn composite(top: Color, bottom: Color) -> Color {
        let ta = f64::from(top.a) / 255.0;
        let ba = f64::from(bottom.a) / 255.0;
        let bottom_weight = ba * (1.0 - ta);
        let ra = ta + bottom_weight;

        if ra <= 0.0 {
            return Color::TRANSPARENT;
        }

        let blend = |tc: u8, bc: u8| -> u8 {
            wrap_channel(((f64::from(tc) * ta + f64::from(bc) * bottom_weight) / ra).round())
        };

        Color {
            r: blend(top.r, bottom.r),
            g: blend(top.g, bottom.g),
            b: blend(top.b, bottom.b),
            a: wrap_channel((ra * 255.0).round()),
        }
    }

    /// Blend this color over another; same as `Color::composite(self, bottom)`
    #[must_use]
    #[inline]
    pub fn composite_over(self, bottom: Color) -> Color {
        Color::composite(self, bottom)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s.trim())
    }
}

impl TryFrom<String> for Color {
    type Error = RasterError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex8()
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Color::from_rgba8(rgba)
    }
}
