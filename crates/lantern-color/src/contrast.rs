// SPDX-License-Identifier: MIT
//
// WCAG relative luminance and contrast-ratio math.
//
// Track badges are rendered with the track's brand color as background, so
// the label has to be black or white — whichever reads better. WCAG 2.x
// defines "reads better" precisely: linearize the sRGB channels, take the
// perceptually weighted luminance sum, then compare contrast ratios
// against both extremes.
//
// The linearization threshold here is 0.03928, the constant published in
// WCAG 2.0. Later errata use 0.04045; for 8-bit inputs the two never
// disagree, but this module keeps the published 2.0 formula verbatim.

use std::fmt;

use crate::rgb::Rgb;

// ─── Luminance ───────────────────────────────────────────────────────────────

/// Linearize one sRGB channel fraction (gamma expansion).
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.0.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_fractions();
    let r_lin = linearize(r);
    let g_lin = linearize(g);
    let b_lin = linearize(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ─── Text color selection ────────────────────────────────────────────────────

/// The label color chosen for a badge: black or white, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// `#000` — picked when black text contrasts strictly better.
    Black,
    /// `#fff` — picked otherwise, including exact ties.
    White,
}

impl TextColor {
    /// The three-digit hex form the web templates expect.
    #[inline]
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Black => "#000",
            Self::White => "#fff",
        }
    }

    /// The underlying color value.
    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::BLACK,
            Self::White => Rgb::WHITE,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

/// Pick black or white text for the given background color.
///
/// Computes the contrast ratio of both candidates against the background:
///
/// - white: `(1.0 + 0.05) / (L + 0.05)`
/// - black: `(L + 0.05) / (0.0 + 0.05)`
///
/// and returns whichever is higher. Ties go to white (black wins only on a
/// strictly greater ratio).
#[must_use]
pub fn text_color_for(background: Rgb) -> TextColor {
    let luminance = relative_luminance(background);
    let contrast_white = 1.05 / (luminance + 0.05);
    let contrast_black = (luminance + 0.05) / 0.05;
    if contrast_black > contrast_white {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// String-level convenience: parse a hex background and pick a text color.
///
/// Mirrors the shape templates want: hex string in, `"#000"` or `"#fff"` out.
///
/// # Errors
///
/// [`crate::ParseColorError`] if the background string is not a valid
/// six-digit hex color.
pub fn text_color_for_hex(background: &str) -> Result<&'static str, crate::ParseColorError> {
    Ok(text_color_for(Rgb::from_hex(background)?).as_hex())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
