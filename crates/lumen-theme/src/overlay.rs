//! Overlay passes — the ordered transforms applied after base resolution.
//!
//! Each pass looks at the bundle and the parameters, decides whether it
//! applies, and rewrites part of the bundle. Order matters and is fixed:
//!
//! ```text
//! 1. color overrides   primaryColor / secondaryColor replace brand roles
//! 2. high contrast     mode == highContrast: fixed palette, flat shadows
//! 3. enhanced focus    enhancedFocus: AAA body text, wider focus rings
//! 4. reduced motion    motionReduced: every duration becomes 0
//! ```
//!
//! Because (2) replaces the palette outright, a color override never
//! survives high contrast, and (3) cannot raise contrast any further on a
//! 21:1 scheme. Under high contrast (3) only widens focus and borders.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::contrast::ensure_contrast;
use crate::mode::Mode;
use crate::palette::HIGH_CONTRAST;
use crate::params::Parameters;
use crate::tokens::{Motion, Shadow, StyleTokens};

/// Body text target ratio under enhanced focus (WCAG AAA, normal text).
const ENHANCED_TEXT_RATIO: f64 = 7.0;

/// Secondary text target ratio under enhanced focus (WCAG AA, normal text).
const ENHANCED_SECONDARY_RATIO: f64 = 4.5;

bitflags! {
    /// The set of overlay passes that changed a bundle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Overlay: u8 {
        const COLOR_OVERRIDE = 1 << 0;
        const HIGH_CONTRAST  = 1 << 1;
        const ENHANCED_FOCUS = 1 << 2;
        const REDUCED_MOTION = 1 << 3;
    }
}

/// One step of the pipeline.
pub struct Pass {
    /// Name for logs.
    pub name: &'static str,
    /// Flag recorded in [`StyleTokens::overlays`] when the pass applies.
    pub flag: Overlay,
    /// Rewrite the bundle; returns `true` if the pass applied.
    pub apply: fn(&mut StyleTokens, &Parameters) -> bool,
}

/// The passes, in application order.
pub const PIPELINE: [Pass; 4] = [
    Pass {
        name: "color-override",
        flag: Overlay::COLOR_OVERRIDE,
        apply: color_override,
    },
    Pass {
        name: "high-contrast",
        flag: Overlay::HIGH_CONTRAST,
        apply: high_contrast,
    },
    Pass {
        name: "enhanced-focus",
        flag: Overlay::ENHANCED_FOCUS,
        apply: enhanced_focus,
    },
    Pass {
        name: "reduced-motion",
        flag: Overlay::REDUCED_MOTION,
        apply: reduced_motion,
    },
];

/// Run every pass in order, recording which ones applied.
pub fn apply_pipeline(tokens: &mut StyleTokens, params: &Parameters) {
    for pass in &PIPELINE {
        if (pass.apply)(tokens, params) {
            log::trace!("overlay {} applied", pass.name);
            tokens.overlays |= pass.flag;
        }
    }
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

fn color_override(tokens: &mut StyleTokens, params: &Parameters) -> bool {
    let mut applied = false;
    if let Some(primary) = params.primary_color {
        tokens.palette.primary = primary;
        tokens.focus.outline_color = primary;
        applied = true;
    }
    if let Some(secondary) = params.secondary_color {
        tokens.palette.secondary = secondary;
        applied = true;
    }
    applied
}

fn high_contrast(tokens: &mut StyleTokens, _params: &Parameters) -> bool {
    if tokens.mode != Mode::HighContrast {
        return false;
    }
    tokens.palette = HIGH_CONTRAST;
    tokens.shadows = [Shadow::None; 5];
    tokens.focus.outline_color = HIGH_CONTRAST.primary;
    tokens.focus.border_width = tokens.focus.border_width.max(2);
    true
}

fn enhanced_focus(tokens: &mut StyleTokens, params: &Parameters) -> bool {
    if !params.enhanced_focus() {
        return false;
    }
    let p = &mut tokens.palette;
    for surface in [p.background, p.paper] {
        p.text_primary = ensure_contrast(p.text_primary, surface, ENHANCED_TEXT_RATIO);
        p.text_secondary = ensure_contrast(p.text_secondary, surface, ENHANCED_SECONDARY_RATIO);
    }

    let focus = &mut tokens.focus;
    focus.outline_width += 1;
    focus.outline_offset = focus.outline_offset.max(2);
    focus.border_width += 1;
    true
}

fn reduced_motion(tokens: &mut StyleTokens, params: &Parameters) -> bool {
    if !params.motion_reduced() {
        return false;
    }
    tokens.motion = Motion::none();
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio_rgb;
    use crate::generate::resolve;
    use crate::mode::Variant;
    use lumen_color::Rgb;
    use pretty_assertions::assert_eq;

    fn with(f: impl FnOnce(&mut Parameters)) -> Parameters {
        let mut p = Parameters::defaults();
        f(&mut p);
        p
    }

    #[test]
    fn pipeline_order_is_fixed() {
        let names: Vec<&str> = PIPELINE.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["color-override", "high-contrast", "enhanced-focus", "reduced-motion"]
        );
    }

    #[test]
    fn no_overlay_by_default() {
        let t = resolve(Mode::Light, Variant::Default, &Parameters::defaults());
        assert_eq!(t.overlays, Overlay::empty());
    }

    // ── Color overrides ─────────────────────────────────────────────

    #[test]
    fn overrides_replace_brand_roles() {
        let orange = Rgb::new(0xff, 0x6f, 0x00);
        let teal = Rgb::new(0x00, 0x96, 0x88);
        let p = with(|p| {
            p.primary_color = Some(orange);
            p.secondary_color = Some(teal);
        });
        let t = resolve(Mode::Light, Variant::Modern, &p);
        assert_eq!(t.palette.primary, orange);
        assert_eq!(t.palette.secondary, teal);
        assert_eq!(t.focus.outline_color, orange);
        assert!(t.overlays.contains(Overlay::COLOR_OVERRIDE));
    }

    #[test]
    fn high_contrast_discards_overrides() {
        let p = with(|p| p.primary_color = Some(Rgb::new(0xff, 0x6f, 0x00)));
        let t = resolve(Mode::HighContrast, Variant::Default, &p);
        assert_eq!(t.palette, HIGH_CONTRAST);
        assert!(t.overlays.contains(Overlay::COLOR_OVERRIDE | Overlay::HIGH_CONTRAST));
    }

    // ── High contrast ───────────────────────────────────────────────

    #[test]
    fn high_contrast_palette_is_variant_independent() {
        let classic = resolve(Mode::HighContrast, Variant::Classic, &Parameters::defaults());
        let modern = resolve(Mode::HighContrast, Variant::Modern, &Parameters::defaults());
        assert_eq!(classic.palette, modern.palette);
        // Shape and type still differ.
        assert_ne!(classic.typography.family, modern.typography.family);
        assert_ne!(classic.radius, modern.radius);
    }

    #[test]
    fn high_contrast_flattens_shadows_and_widens_borders() {
        for &v in Variant::ALL {
            let t = resolve(Mode::HighContrast, v, &Parameters::defaults());
            assert!(t.shadows.iter().all(|s| s.is_none()), "{v}");
            assert_eq!(t.focus.border_width, 2);
            assert_eq!(t.focus.outline_color, Rgb::YELLOW);
        }
    }

    // ── Enhanced focus ──────────────────────────────────────────────

    #[test]
    fn enhanced_focus_reaches_aaa_body_text() {
        let p = with(|p| p.enhanced_focus = Some(true));
        for &v in Variant::ALL {
            for &m in Mode::ALL {
                let t = resolve(m, v, &p);
                let on_bg = contrast_ratio_rgb(t.palette.text_primary, t.palette.background);
                let on_paper = contrast_ratio_rgb(t.palette.text_primary, t.palette.paper);
                assert!(on_bg >= 7.0, "{v}/{m}: {on_bg:.2}");
                assert!(on_paper >= 7.0, "{v}/{m}: {on_paper:.2}");
                let secondary = contrast_ratio_rgb(t.palette.text_secondary, t.palette.paper);
                assert!(secondary >= 4.5, "{v}/{m}: {secondary:.2}");
            }
        }
    }

    #[test]
    fn enhanced_focus_widens_rings() {
        let plain = resolve(Mode::Light, Variant::Default, &Parameters::defaults());
        let focused = resolve(
            Mode::Light,
            Variant::Default,
            &with(|p| p.enhanced_focus = Some(true)),
        );
        assert!(focused.focus.outline_width > plain.focus.outline_width);
        assert!(focused.focus.border_width > plain.focus.border_width);
        assert!(focused.focus.outline_offset >= 2);
        assert!(focused.overlays.contains(Overlay::ENHANCED_FOCUS));
    }

    #[test]
    fn enhanced_focus_composes_with_high_contrast() {
        let hc = resolve(Mode::HighContrast, Variant::Odoo, &Parameters::defaults());
        let both = resolve(
            Mode::HighContrast,
            Variant::Odoo,
            &with(|p| p.enhanced_focus = Some(true)),
        );
        // Colors are already maximal; only focus treatment changes.
        assert_eq!(both.palette, hc.palette);
        assert_eq!(both.focus.border_width, hc.focus.border_width + 1);
        assert_eq!(both.focus.outline_width, hc.focus.outline_width + 1);
        assert_eq!(both.overlays, Overlay::HIGH_CONTRAST | Overlay::ENHANCED_FOCUS);
    }

    // ── Reduced motion ──────────────────────────────────────────────

    #[test]
    fn reduced_motion_only_touches_motion() {
        let plain = resolve(Mode::Dark, Variant::Classic, &Parameters::defaults());
        let still = resolve(
            Mode::Dark,
            Variant::Classic,
            &with(|p| p.motion_reduced = Some(true)),
        );
        assert!(still.motion.is_still());
        assert!(!plain.motion.is_still());

        let mut expected = plain;
        expected.motion = Motion::none();
        expected.overlays |= Overlay::REDUCED_MOTION;
        assert_eq!(still, expected);
    }
}
