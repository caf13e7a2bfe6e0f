// SPDX-License-Identifier: MIT
//
// lantern-color — sRGB color values and WCAG contrast math.
//
// The catalog assigns every track a brand color, and the browser has to
// put legible text on top of it. This crate owns the two pieces that make
// that possible: a plain 24-bit sRGB value type with strict hex parsing,
// and the WCAG 2.x relative-luminance / contrast-ratio computation that
// picks black or white text for any background.
//
// This crate intentionally avoids full color-space libraries (palette,
// csscolorparser) — the catalog contract is a six-digit hex triple and
// two fixed text colors, nothing more. Everything here is pure and
// allocation-free except hex formatting.

pub mod contrast;
pub mod rgb;

pub use contrast::{
    TextColor, contrast_ratio, relative_luminance, text_color_for, text_color_for_hex,
};
pub use rgb::{ParseColorError, Rgb};
