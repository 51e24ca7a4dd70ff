// SPDX-License-Identifier: MIT
//
// lumen-color color system — 8-bit sRGB with WCAG luminance support.
//
// Single-character variable names (r, g, b, c, t) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Every color in a theme table, a user override, or a contrast query is a
// hex triplet. This module owns the one place where those strings become
// numbers, and it refuses input it cannot read instead of guessing.
//
// Conversion pipeline:
//
//   "#rrggbb" → Rgb (u8 channels) → sRGB (0.0–1.0) → linear → luminance
//
// Mixing happens per channel in sRGB space and rounds back to u8, so a
// mixed color is always exactly representable as a hex string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ─── ColorError ──────────────────────────────────────────────────────────────

/// Why a string could not be read as a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was empty (or only `#`).
    #[error("empty color string")]
    Empty,

    /// The digit count was not 3 or 6.
    #[error("invalid hex color {input:?}: expected 3 or 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    /// A character outside `0-9a-fA-F` was found.
    #[error("invalid hex color {input:?}: {ch:?} is not a hex digit")]
    InvalidDigit { input: String, ch: char },
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// # Examples
///
/// ```
/// use lumen_color::Rgb;
///
/// let blue = Rgb::hex("#1976d2").unwrap();
/// assert_eq!(blue, Rgb::new(0x19, 0x76, 0xd2));
/// assert_eq!(blue.to_hex(), "#1976d2");
///
/// // Short form expands each digit.
/// assert_eq!(Rgb::hex("fff").unwrap(), Rgb::WHITE);
///
/// // Malformed input is an error, never black.
/// assert!(Rgb::hex("#12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    ///
    /// Used by the const palette tables.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the string is empty, has the wrong number
    /// of digits, or contains a non-hex character.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0);

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Channels as sRGB floats in `[0.0, 1.0]`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels as linear-light floats (gamma removed).
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // ─── Manipulation ────────────────────────────────────────────────────

    /// Linear interpolation toward `other` in sRGB space.
    ///
    /// `t = 0.0` returns `self`, `t = 1.0` returns `other`. Values outside
    /// `[0.0, 1.0]` are clamped.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            let a = f64::from(a);
            let b = f64::from(b);
            to_u8((b - a).mul_add(t, a))
        };
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }

    /// Mix toward white by `amount` (0.0–1.0).
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.mix(Self::WHITE, amount)
    }

    /// Mix toward black by `amount` (0.0–1.0).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.mix(Self::BLACK, amount)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ─── sRGB Transfer Function ──────────────────────────────────────────────────
//
// WCAG 2.0 publishes the linearization threshold as 0.03928 (the IEC
// standard uses 0.04045). The difference never changes an 8-bit result
// by more than rounding, and contrast figures must match what WCAG tools
// report, so the WCAG constant is used.

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    let s = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    let mut digits = [0u8; 6];
    let mut len = 0;
    for ch in s.chars() {
        let Some(d) = ch.to_digit(16) else {
            return Err(ColorError::InvalidDigit {
                input: input.to_string(),
                ch,
            });
        };
        if len < digits.len() {
            // to_digit(16) is always < 16, so the conversion cannot fail.
            digits[len] = u8::try_from(d).unwrap_or_default();
        }
        len += 1;
    }

    match len {
        // #RGB
        3 => Ok(Rgb::new(
            (digits[0] << 4) | digits[0],
            (digits[1] << 4) | digits[1],
            (digits[2] << 4) | digits[2],
        )),
        // #RRGGBB
        6 => Ok(Rgb::new(
            (digits[0] << 4) | digits[1],
            (digits[2] << 4) | digits[3],
            (digits[4] << 4) | digits[5],
        )),
        _ => Err(ColorError::InvalidLength {
            input: input.to_string(),
            len,
        }),
    }
}

/// Round a float channel (0.0–255.0) to a u8.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v + 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Parsing ─────────────────────────────────────────────────────────

    #[test]
    fn parse_long_form() {
        assert_eq!(Rgb::hex("#1976d2").unwrap(), Rgb::new(0x19, 0x76, 0xd2));
        assert_eq!(Rgb::hex("1976D2").unwrap(), Rgb::new(0x19, 0x76, 0xd2));
    }

    #[test]
    fn parse_short_form_expands() {
        assert_eq!(Rgb::hex("#f0a").unwrap(), Rgb::new(0xff, 0x00, 0xaa));
        assert_eq!(Rgb::hex("000").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Rgb::hex("  #ffffff \n").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Rgb::hex(""), Err(ColorError::Empty));
        assert_eq!(Rgb::hex("#"), Err(ColorError::Empty));
        assert_eq!(Rgb::hex("   "), Err(ColorError::Empty));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Rgb::hex("#12345"),
            Err(ColorError::InvalidLength {
                input: "#12345".into(),
                len: 5
            })
        );
        // #RRGGBBAA is not accepted here: theme colors are opaque.
        assert!(matches!(
            Rgb::hex("#11223344"),
            Err(ColorError::InvalidLength { len: 8, .. })
        ));
    }

    #[test]
    fn parse_rejects_non_hex_digit() {
        assert_eq!(
            Rgb::hex("#gg0000"),
            Err(ColorError::InvalidDigit {
                input: "#gg0000".into(),
                ch: 'g'
            })
        );
        assert!(Rgb::hex("red").is_err());
        assert!(Rgb::hex("##fff").is_err());
    }

    #[test]
    fn from_str_matches_hex() {
        let parsed: Rgb = "#abc".parse().unwrap();
        assert_eq!(parsed, Rgb::hex("#aabbcc").unwrap());
    }

    #[test]
    fn from_u32_unpacks_channels() {
        assert_eq!(Rgb::from_u32(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
    }

    // ── Formatting ──────────────────────────────────────────────────────

    #[test]
    fn to_hex_is_lowercase_long_form() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_hex(), "#ab0cff");
        assert_eq!(Rgb::YELLOW.to_string(), "#ffff00");
    }

    // ── Linearization ───────────────────────────────────────────────────

    #[test]
    fn linear_endpoints() {
        assert!(srgb_to_linear(0.0).abs() < 1e-12);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_below_threshold_is_scaled() {
        let c = 0.03;
        assert!((srgb_to_linear(c) - c / 12.92).abs() < 1e-12);
    }

    #[test]
    fn linear_mid_gray() {
        // sRGB 0.5 linearizes to ~0.214.
        let lin = srgb_to_linear(0.5);
        assert!((lin - 0.214).abs() < 0.001, "mid-gray: {lin}");
    }

    // ── Mixing ──────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn mix_midpoint_rounds() {
        assert_eq!(Rgb::BLACK.mix(Rgb::WHITE, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn mix_clamps_t() {
        let a = Rgb::new(10, 20, 30);
        assert_eq!(a.mix(Rgb::WHITE, 2.0), Rgb::WHITE);
        assert_eq!(a.mix(Rgb::WHITE, -1.0), a);
    }

    #[test]
    fn lighten_and_darken() {
        let gray = Rgb::new(100, 100, 100);
        assert!(gray.lighten(0.5).r > gray.r);
        assert!(gray.darken(0.5).r < gray.r);
    }

    // ── Serde ───────────────────────────────────────────────────────────

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x71, 0x4b, 0x67)).unwrap();
        assert_eq!(json, "\"#714b67\"");
        let back: Rgb = serde_json::from_str("\"#714B67\"").unwrap();
        assert_eq!(back, Rgb::new(0x71, 0x4b, 0x67));
    }

    #[test]
    fn serde_rejects_malformed() {
        assert!(serde_json::from_str::<Rgb>("\"#xyz\"").is_err());
        assert!(serde_json::from_str::<Rgb>("42").is_err());
    }
}
