//! Per-variant rule-sets — everything about a variant except its palette.
//!
//! A [`VariantRules`] entry says how a variant scales spacing, how round its
//! corners are at each radius setting, what its type looks like, how strong
//! its shadows are in light and dark surroundings, and how long its
//! transitions run. Parameters pick a step; the variant decides what the
//! step is worth.
//!
//! | Variant   | Spacing | Radius ladder   | Heading ratio | Shadows (light/dark) |
//! |-----------|---------|-----------------|---------------|----------------------|
//! | default   | 100 %   | 0 / 4 / 8 / 16  | 1.20          | 0.14 / 0.40          |
//! | odoo      |  75 %   | 0 / 3 / 6 / 12  | 1.125         | 0.10 / 0.35          |
//! | modern    | 125 %   | 0 / 8 / 12 / 16 | 1.25          | 0.06 / 0.25          |
//! | classic   | 100 %   | 0 / 2 / 4 / 8   | 1.333         | 0.24 / 0.55          |

use crate::mode::{Mode, Variant};
use crate::params::{BorderRadius, Density, FontSize, Spacing};
use crate::tokens::{ButtonCase, Motion, Shadow, ShadowScale};

// ---------------------------------------------------------------------------
// VariantRules
// ---------------------------------------------------------------------------

/// Shape, type, depth, and motion rules of one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantRules {
    /// CSS font stack.
    pub font_family: &'static str,
    /// Heading ladder ratio (h6 = base × ratio, h1 = base × ratio⁶).
    pub heading_ratio: f32,
    /// Heading font weight.
    pub heading_weight: u16,
    /// Button label casing.
    pub button_case: ButtonCase,
    /// Spacing scale in percent of the base unit.
    pub spacing_percent: u16,
    /// Radius in px for `none`, `small`, `medium`, `large`.
    pub radius: [u16; 4],
    /// Shadow opacity at elevation 1 on light surfaces.
    pub shadow_alpha_light: f32,
    /// Shadow opacity at elevation 1 on dark surfaces.
    pub shadow_alpha_dark: f32,
    /// Standard transition duration in ms.
    pub transition_ms: u16,
}

const RULES: [VariantRules; 4] = [
    // default
    VariantRules {
        font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
        heading_ratio: 1.2,
        heading_weight: 500,
        button_case: ButtonCase::Uppercase,
        spacing_percent: 100,
        radius: [0, 4, 8, 16],
        shadow_alpha_light: 0.14,
        shadow_alpha_dark: 0.40,
        transition_ms: 300,
    },
    // odoo
    VariantRules {
        font_family: "\"Roboto\", \"Lucida Grande\", \"Helvetica\", \"Verdana\", \"Arial\", sans-serif",
        heading_ratio: 1.125,
        heading_weight: 500,
        button_case: ButtonCase::Uppercase,
        spacing_percent: 75,
        radius: [0, 3, 6, 12],
        shadow_alpha_light: 0.10,
        shadow_alpha_dark: 0.35,
        transition_ms: 250,
    },
    // modern
    VariantRules {
        font_family: "\"Inter\", \"Segoe UI\", system-ui, sans-serif",
        heading_ratio: 1.25,
        heading_weight: 600,
        button_case: ButtonCase::None,
        spacing_percent: 125,
        radius: [0, 8, 12, 16],
        shadow_alpha_light: 0.06,
        shadow_alpha_dark: 0.25,
        transition_ms: 200,
    },
    // classic
    VariantRules {
        font_family: "\"Georgia\", \"Times New Roman\", serif",
        heading_ratio: 1.333,
        heading_weight: 700,
        button_case: ButtonCase::Capitalize,
        spacing_percent: 100,
        radius: [0, 2, 4, 8],
        shadow_alpha_light: 0.24,
        shadow_alpha_dark: 0.55,
        transition_ms: 350,
    },
];

/// The rule-set of `variant`.
#[must_use]
pub const fn rules(variant: Variant) -> &'static VariantRules {
    &RULES[variant.index()]
}

// ---------------------------------------------------------------------------
// Piecewise lookups
// ---------------------------------------------------------------------------

impl VariantRules {
    /// Spacing unit in px: compact 4, normal 8, comfortable 12, scaled by
    /// the variant's percentage and rounded to whole pixels.
    #[must_use]
    pub fn spacing_unit(&self, spacing: Spacing) -> u16 {
        let base: u16 = match spacing {
            Spacing::Compact => 4,
            Spacing::Normal => 8,
            Spacing::Comfortable => 12,
        };
        let scaled = f32::from(base) * f32::from(self.spacing_percent) / 100.0;
        (scaled.round() as u16).max(1)
    }

    /// Corner radius in px.
    #[must_use]
    pub const fn radius(&self, radius: BorderRadius) -> u16 {
        let step = match radius {
            BorderRadius::None => 0,
            BorderRadius::Small => 1,
            BorderRadius::Medium => 2,
            BorderRadius::Large => 3,
        };
        self.radius[step]
    }

    /// Base font size in px and the h1–h6 ladder (h1 first).
    #[must_use]
    pub fn type_scale(&self, size: FontSize) -> (f32, [f32; 6]) {
        let base = base_font_px(size);
        let mut headings = [0.0; 6];
        for (i, h) in headings.iter_mut().enumerate() {
            // h1 is six steps up the ladder, h6 one step.
            let steps = 6 - i as i32;
            *h = round2(base * self.heading_ratio.powi(steps));
        }
        (base, headings)
    }

    /// Shadow scale for `mode`.
    ///
    /// Level 0 is always flat. Levels 1–4 grow in offset and blur; opacity
    /// grows more slowly so deep elevations don't turn muddy. High contrast
    /// is flat at every level.
    #[must_use]
    pub fn shadow_scale(&self, mode: Mode) -> ShadowScale {
        let mut scale = [Shadow::None; 5];
        if mode == Mode::HighContrast {
            return scale;
        }
        let alpha = if mode.is_dark() {
            self.shadow_alpha_dark
        } else {
            self.shadow_alpha_light
        };
        for (level, shadow) in scale.iter_mut().enumerate().skip(1) {
            let level = level as u16;
            *shadow = Shadow::Drop {
                offset_y: level * 2,
                blur: level * 4,
                alpha: round2(alpha * (1.0 + 0.25 * f32::from(level - 1))),
            };
        }
        scale
    }

    /// Transition durations derived from the standard duration.
    #[must_use]
    pub fn motion(&self) -> Motion {
        let standard = self.transition_ms;
        Motion {
            shortest: standard / 2,
            short: standard * 3 / 4,
            standard,
            complex: standard * 5 / 4,
            easing: "cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

/// Control height in px for a density setting.
#[must_use]
pub const fn control_height(density: Density) -> u16 {
    match density {
        Density::Compact => 32,
        Density::Medium => 40,
        Density::Comfortable => 48,
    }
}

const fn base_font_px(size: FontSize) -> f32 {
    match size {
        FontSize::Small => 12.0,
        FontSize::Medium => 14.0,
        FontSize::Large => 16.0,
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
