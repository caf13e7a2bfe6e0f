// SPDX-License-Identifier: MIT
//
// 24-bit sRGB color values with strict hex parsing.
//
// The catalog stores colors the way the web writes them: an optional `#`
// followed by exactly six hex digits. That is the whole wire contract —
// no shorthand `#RGB`, no alpha, no named colors. Parsing is strict and
// fails fast; a malformed color string is a data error the caller needs
// to hear about, not something to paper over with a default.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color string failed to parse.
///
/// Raised by [`Rgb::from_hex`] (and the serde / `FromStr` paths built on
/// it). The offending input is carried verbatim for error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// After stripping the optional `#`, the string was not six characters.
    #[error("color `{0}` must be 6 hex digits (with optional `#` prefix)")]
    WrongLength(String),

    /// A character outside `[0-9a-fA-F]` appeared in the digit positions.
    #[error("color `{0}` contains a non-hexadecimal digit")]
    InvalidDigit(String),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A 24-bit sRGB color. No alpha channel.
///
/// This is a plain value type: channels are stored as raw sRGB bytes,
/// exactly as they appear in the hex serialization. All derived quantities
/// (luminance, contrast) are computed on demand by [`crate::contrast`].
///
/// # Examples
///
/// ```
/// use lantern_color::Rgb;
///
/// let java_orange = Rgb::from_hex("#f89820").unwrap();
/// assert_eq!(java_orange, Rgb::new(0xf8, 0x98, 0x20));
/// assert_eq!(java_orange.to_hex(), "#f89820");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
}

impl Rgb {
    /// Pure black (`#000000`).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white (`#ffffff`).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from raw channel bytes.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from hex notation.
    ///
    /// Accepts exactly six hex digits after an optional `#` prefix
    /// (`"#f89820"` or `"f89820"`). Anything else is rejected.
    ///
    /// # Errors
    ///
    /// [`ParseColorError::WrongLength`] if the digit count is not six,
    /// [`ParseColorError::InvalidDigit`] if a non-hex character appears.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ParseColorError::WrongLength(s.to_string()));
        }

        let bytes = digits.as_bytes();
        let channel = |i: usize| -> Result<u8, ParseColorError> {
            let hi = hex_digit(bytes[i]);
            let lo = hex_digit(bytes[i + 1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
                _ => Err(ParseColorError::InvalidDigit(s.to_string())),
            }
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Format as lowercase `#rrggbb` hex notation.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The three channels as fractions in [0.0, 1.0].
    ///
    /// This is the form the WCAG luminance formula starts from.
    #[inline]
    #[must_use]
    pub fn to_fractions(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Decode a single ASCII hex digit.
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Trait plumbing ──────────────────────────────────────────────────────────

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Serde uses the hex string form so the Rust model round-trips against the
// site's JSON catalog unchanged (`"color": "#f89820"`).

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 6-digit hex color string like \"#f89820\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Rgb, E> {
                Rgb::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
