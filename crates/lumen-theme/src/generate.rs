//! Token generation — the single entry point from configuration to tokens.

use crate::mode::{Mode, Variant};
use crate::overlay::{Overlay, apply_pipeline};
use crate::palette::base_palette;
use crate::params::Parameters;
use crate::tokens::{FocusStyle, StyleTokens, Typography};
use crate::variant::{control_height, rules};

/// Resolve a complete style bundle.
///
/// Starts from the (variant, mode) base palette and the variant's rule-set,
/// then runs the overlay pipeline. Parameters that are absent fall back to
/// their defaults, so any `Parameters` value is accepted.
#[must_use]
pub fn resolve(mode: Mode, variant: Variant, params: &Parameters) -> StyleTokens {
    let r = rules(variant);
    let palette = base_palette(variant, mode);
    let (base_size, headings) = r.type_scale(params.font_size());

    let mut tokens = StyleTokens {
        mode,
        variant,
        palette,
        shadows: r.shadow_scale(mode),
        spacing_unit: r.spacing_unit(params.spacing()),
        radius: r.radius(params.border_radius()),
        typography: Typography {
            family: r.font_family,
            base_size,
            headings,
            heading_weight: r.heading_weight,
            button_case: r.button_case,
        },
        focus: FocusStyle {
            outline_width: 2,
            outline_offset: 0,
            outline_color: palette.primary,
            border_width: 1,
        },
        control_height: control_height(params.visual_density()),
        motion: r.motion(),
        overlays: Overlay::empty(),
    };

    apply_pipeline(&mut tokens, params);
    log::trace!(
        "resolved {variant}/{mode} (overlays {:?})",
        tokens.overlays
    );
    tokens
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
