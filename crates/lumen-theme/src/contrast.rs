//! WCAG contrast ratio computation and enforcement.
//!
//! - [`contrast_ratio`]: ratio between two hex colors, in `[1, 21]`
//! - [`has_adequate_contrast`]: threshold check per WCAG level and text size
//! - [`ensure_contrast`]: push a foreground toward black or white until it
//!   reaches a target ratio (used by the enhanced-focus pass)
//! - [`audit`]: every text/surface pairing of a resolved bundle
//!
//! | Level | Normal text | Large text |
//! |-------|-------------|------------|
//! | AA    | 4.5         | 3.0        |
//! | AAA   | 7.0         | 4.5        |
//!
//! Hex input is validated strictly. A malformed color is a [`ColorError`],
//! never a silent black.

use serde::Serialize;

use lumen_color::{ColorError, Rgb};

use crate::tokens::StyleTokens;

keyword_enum! {
    /// WCAG conformance level.
    pub enum WcagLevel ("WCAG level") {
        #[default]
        Aa => "AA",
        Aaa => "AAA",
    }
}

keyword_enum! {
    /// WCAG text size class. Large is ≥ 18pt, or ≥ 14pt bold.
    pub enum TextSize ("text size") {
        #[default]
        Normal => "normal",
        Large => "large",
    }
}

/// Minimum ratio for a level and text size.
#[must_use]
pub const fn min_ratio(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::Aa, TextSize::Normal) | (WcagLevel::Aaa, TextSize::Large) => 4.5,
        (WcagLevel::Aa, TextSize::Large) => 3.0,
        (WcagLevel::Aaa, TextSize::Normal) => 7.0,
    }
}

// ---------------------------------------------------------------------------
// Ratio
// ---------------------------------------------------------------------------

/// Relative luminance per WCAG 2.0: `0.2126 R + 0.7152 G + 0.0722 B` over
/// linearized channels. `0.0` is black, `1.0` is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_linear();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Contrast ratio between two colors. Symmetric, always in `[1.0, 21.0]`.
#[must_use]
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors.
///
/// # Errors
///
/// Returns [`ColorError`] if either color is not a valid `#RGB` or
/// `#RRGGBB` string.
pub fn contrast_ratio(fg: &str, bg: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio_rgb(Rgb::hex(fg)?, Rgb::hex(bg)?))
}

/// Whether `fg` on `bg` meets `level` for `size` text.
///
/// # Errors
///
/// Returns [`ColorError`] if either color is malformed.
pub fn has_adequate_contrast(
    fg: &str,
    bg: &str,
    level: WcagLevel,
    size: TextSize,
) -> Result<bool, ColorError> {
    Ok(contrast_ratio(fg, bg)? >= min_ratio(level, size))
}

// ---------------------------------------------------------------------------
// Enforcement
// ---------------------------------------------------------------------------

/// Move `fg` toward black or white until it reaches `min_ratio` against
/// `bg`, changing it as little as possible.
///
/// The direction is whichever extreme contrasts more with `bg`. If even
/// that extreme falls short, the extreme is returned.
#[must_use]
pub fn ensure_contrast(fg: Rgb, bg: Rgb, min_ratio: f64) -> Rgb {
    if contrast_ratio_rgb(fg, bg) >= min_ratio {
        return fg;
    }

    let target = if contrast_ratio_rgb(Rgb::WHITE, bg) >= contrast_ratio_rgb(Rgb::BLACK, bg) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    };

    // Binary search on the mix amount; stay as close to `fg` as possible.
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    let mut best = target;
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        let candidate = fg.mix(target, mid);
        if contrast_ratio_rgb(candidate, bg) >= min_ratio {
            best = candidate;
            hi = mid;
        } else {
            lo = mid;
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// One foreground/background pairing of a bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    /// Human-readable pairing, e.g. `text-primary on background`.
    pub pair: &'static str,
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
    /// The text size this pairing is used for.
    pub size: TextSize,
}

impl ContrastCheck {
    /// Whether the pairing meets `level`.
    #[must_use]
    pub fn passes(&self, level: WcagLevel) -> bool {
        self.ratio >= min_ratio(level, self.size)
    }
}

/// Check every text/surface pairing of a resolved bundle.
///
/// Brand colors on paper are checked as large text: they carry buttons and
/// headings, not body copy.
#[must_use]
pub fn audit(tokens: &StyleTokens) -> Vec<ContrastCheck> {
    let p = &tokens.palette;
    let pairs: [(&'static str, Rgb, Rgb, TextSize); 5] = [
        ("text-primary on background", p.text_primary, p.background, TextSize::Normal),
        ("text-primary on paper", p.text_primary, p.paper, TextSize::Normal),
        ("text-secondary on paper", p.text_secondary, p.paper, TextSize::Normal),
        ("primary on paper", p.primary, p.paper, TextSize::Large),
        ("secondary on paper", p.secondary, p.paper, TextSize::Large),
    ];
    pairs
        .into_iter()
        .map(|(pair, foreground, background, size)| ContrastCheck {
            pair,
            foreground,
            background,
            ratio: contrast_ratio_rgb(foreground, background),
            size,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-9));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Rgb::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-9));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn white_on_black_is_21() {
        let ratio = contrast_ratio("#FFFFFF", "#000000").unwrap();
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn same_color_is_1() {
        let ratio = contrast_ratio("#777777", "#777777").unwrap();
        assert!(approx_eq(ratio, 1.0, 1e-9), "same-color contrast: {ratio}");
    }

    #[test]
    fn known_pairing() {
        // #767676 on white is the classic "just passes AA" gray.
        let ratio = contrast_ratio("#767676", "#ffffff").unwrap();
        assert!(approx_eq(ratio, 4.54, 0.01), "gray on white: {ratio}");
    }

    #[test]
    fn short_form_accepted() {
        let long = contrast_ratio("#ffffff", "#000000").unwrap();
        let short = contrast_ratio("fff", "000").unwrap();
        assert!(approx_eq(long, short, 1e-12));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(
            contrast_ratio("#12345", "#000000"),
            Err(ColorError::InvalidLength { len: 5, .. })
        ));
        assert!(matches!(
            contrast_ratio("#ffffff", "black"),
            Err(ColorError::InvalidDigit { .. })
        ));
        assert_eq!(contrast_ratio("", "#000"), Err(ColorError::Empty));
    }

    // ── Thresholds ──────────────────────────────────────────────────

    #[test]
    fn thresholds() {
        assert!(approx_eq(min_ratio(WcagLevel::Aa, TextSize::Normal), 4.5, 1e-12));
        assert!(approx_eq(min_ratio(WcagLevel::Aa, TextSize::Large), 3.0, 1e-12));
        assert!(approx_eq(min_ratio(WcagLevel::Aaa, TextSize::Normal), 7.0, 1e-12));
        assert!(approx_eq(min_ratio(WcagLevel::Aaa, TextSize::Large), 4.5, 1e-12));
    }

    #[test]
    fn black_on_white_passes_aa() {
        assert!(has_adequate_contrast("#000000", "#FFFFFF", WcagLevel::Aa, TextSize::Normal).unwrap());
    }

    #[test]
    fn adjacent_grays_fail_aa() {
        assert!(!has_adequate_contrast("#777777", "#888888", WcagLevel::Aa, TextSize::Normal).unwrap());
    }

    #[test]
    fn large_text_is_more_lenient() {
        // ~4.0:1 — fails AA normal, passes AA large.
        let fg = "#808080";
        let bg = "#ffffff";
        let ratio = contrast_ratio(fg, bg).unwrap();
        assert!(ratio > 3.0 && ratio < 4.5, "{ratio}");
        assert!(!has_adequate_contrast(fg, bg, WcagLevel::Aa, TextSize::Normal).unwrap());
        assert!(has_adequate_contrast(fg, bg, WcagLevel::Aa, TextSize::Large).unwrap());
        assert!(!has_adequate_contrast(fg, bg, WcagLevel::Aaa, TextSize::Large).unwrap());
    }

    #[test]
    fn has_adequate_contrast_propagates_errors() {
        assert!(has_adequate_contrast("#zzzzzz", "#fff", WcagLevel::Aa, TextSize::Normal).is_err());
    }

    #[test]
    fn level_spelling() {
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!("aa".parse::<WcagLevel>().unwrap(), WcagLevel::Aa);
        assert_eq!("LARGE".parse::<TextSize>().unwrap(), TextSize::Large);
        assert!("A".parse::<WcagLevel>().is_err());
    }

    // ── ensure_contrast ─────────────────────────────────────────────

    #[test]
    fn ensure_keeps_readable_color() {
        let fg = Rgb::new(0x21, 0x21, 0x21);
        assert_eq!(ensure_contrast(fg, Rgb::WHITE, 7.0), fg);
    }

    #[test]
    fn ensure_darkens_on_light_background() {
        let fg = Rgb::new(0x99, 0x99, 0x99);
        let bg = Rgb::new(0xf5, 0xf5, 0xf5);
        let adjusted = ensure_contrast(fg, bg, 7.0);
        assert!(contrast_ratio_rgb(adjusted, bg) >= 7.0);
        assert!(relative_luminance(adjusted) < relative_luminance(fg));
    }

    #[test]
    fn ensure_lightens_on_dark_background() {
        let fg = Rgb::new(0x55, 0x55, 0x66);
        let bg = Rgb::new(0x12, 0x12, 0x12);
        let adjusted = ensure_contrast(fg, bg, 7.0);
        assert!(contrast_ratio_rgb(adjusted, bg) >= 7.0);
        assert!(relative_luminance(adjusted) > relative_luminance(fg));
    }

    #[test]
    fn ensure_unreachable_returns_extreme() {
        // Nothing reaches 21:1 against mid gray.
        let bg = Rgb::new(0x80, 0x80, 0x80);
        let adjusted = ensure_contrast(Rgb::new(0x90, 0x90, 0x90), bg, 21.0);
        assert!(adjusted == Rgb::WHITE || adjusted == Rgb::BLACK);
    }

    // ── Properties ──────────────────────────────────────────────────

    fn rgb() -> impl Strategy<Value = Rgb> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
    }

    proptest! {
        #[test]
        fn ratio_is_bounded(a in rgb(), b in rgb()) {
            let ratio = contrast_ratio_rgb(a, b);
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "{ratio}");
        }

        #[test]
        fn ratio_is_symmetric(a in rgb(), b in rgb()) {
            prop_assert!(approx_eq(contrast_ratio_rgb(a, b), contrast_ratio_rgb(b, a), 1e-12));
        }

        #[test]
        fn hex_and_rgb_agree(a in rgb(), b in rgb()) {
            let via_hex = contrast_ratio(&a.to_hex(), &b.to_hex()).unwrap();
            prop_assert!(approx_eq(via_hex, contrast_ratio_rgb(a, b), 1e-12));
        }

        #[test]
        fn ensure_reaches_aa(fg in rgb(), bg in rgb()) {
            // Either black or white always reaches 4.5:1 against any color.
            let adjusted = ensure_contrast(fg, bg, 4.5);
            prop_assert!(contrast_ratio_rgb(adjusted, bg) >= 4.5);
        }
    }
}
