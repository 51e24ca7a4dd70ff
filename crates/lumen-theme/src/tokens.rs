//! The resolved style-token bundle.
//!
//! A [`StyleTokens`] value is the complete, concrete output of
//! [`resolve`](crate::generate::resolve): no optional fields, no lookups
//! left for the renderer. It is recomputed from scratch whenever the
//! configuration changes and has no identity of its own.

use std::fmt;

use serde::Serialize;

use lumen_color::Rgb;

use crate::mode::{Mode, Variant};
use crate::overlay::Overlay;
use crate::palette::Palette;

// ---------------------------------------------------------------------------
// Shadow
// ---------------------------------------------------------------------------

/// One elevation level's shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Shadow {
    /// Flat: no shadow.
    None,
    /// A black drop shadow below the surface.
    #[serde(rename_all = "camelCase")]
    Drop { offset_y: u16, blur: u16, alpha: f32 },
}

impl Shadow {
    /// Whether this level casts no shadow.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Shadow {
    /// CSS `box-shadow` value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Drop {
                offset_y,
                blur,
                alpha,
            } => write!(f, "0px {offset_y}px {blur}px rgba(0, 0, 0, {alpha})"),
        }
    }
}

/// Elevation levels 0–4, lowest first.
pub type ShadowScale = [Shadow; 5];

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

/// Button label casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonCase {
    None,
    Uppercase,
    Capitalize,
}

impl ButtonCase {
    /// CSS `text-transform` value.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Uppercase => "uppercase",
            Self::Capitalize => "capitalize",
        }
    }
}

/// Font family, sizes, and casing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub family: &'static str,
    /// Body text size in px.
    pub base_size: f32,
    /// h1–h6 sizes in px, h1 first.
    pub headings: [f32; 6],
    pub heading_weight: u16,
    pub button_case: ButtonCase,
}

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

/// Focus ring and border treatment of interactive elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusStyle {
    /// Focus outline width in px.
    pub outline_width: u16,
    /// Gap between element and outline in px.
    pub outline_offset: u16,
    pub outline_color: Rgb,
    /// Border width of inputs and outlined controls in px.
    pub border_width: u16,
}

// ---------------------------------------------------------------------------
// Motion
// ---------------------------------------------------------------------------

/// Transition durations in ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    pub shortest: u16,
    pub short: u16,
    pub standard: u16,
    pub complex: u16,
    pub easing: &'static str,
}

impl Motion {
    /// Every duration zero.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            shortest: 0,
            short: 0,
            standard: 0,
            complex: 0,
            easing: "linear",
        }
    }

    /// Whether every transition is instantaneous.
    #[must_use]
    pub const fn is_still(&self) -> bool {
        self.shortest == 0 && self.short == 0 && self.standard == 0 && self.complex == 0
    }
}

// ---------------------------------------------------------------------------
// StyleTokens
// ---------------------------------------------------------------------------

/// The complete resolved style of one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTokens {
    pub mode: Mode,
    pub variant: Variant,
    pub palette: Palette,
    pub shadows: ShadowScale,
    /// Base spacing unit in px.
    pub spacing_unit: u16,
    /// Corner radius in px.
    pub radius: u16,
    pub typography: Typography,
    pub focus: FocusStyle,
    /// Control height in px.
    pub control_height: u16,
    pub motion: Motion,
    /// Which overlay passes changed this bundle.
    pub overlays: Overlay,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
