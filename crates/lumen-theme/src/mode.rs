//! Display modes and visual variants.
//!
//! The theme is always in exactly one [`Mode`] and one [`Variant`]. Both are
//! closed enums: there is no "unknown variant" at runtime, so every table
//! indexed by them is total.
//!
//! | Mode           | Palette source                  | Shadows        |
//! |----------------|---------------------------------|----------------|
//! | `light`        | variant's light table           | variant light  |
//! | `dark`         | variant's dark table            | variant dark   |
//! | `highContrast` | fixed white/black/yellow scheme | forced `none`  |

keyword_enum! {
    /// The display mode.
    pub enum Mode ("mode") {
        /// Light surfaces, dark text.
        #[default]
        Light => "light",
        /// Dark surfaces, light text.
        Dark => "dark",
        /// Maximum-contrast scheme for accessibility.
        HighContrast => "highContrast",
    }
}

impl Mode {
    /// Whether surfaces are dark in this mode.
    ///
    /// High contrast uses a black background, so it counts as dark for
    /// shadow and contrast-direction purposes.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::HighContrast)
    }

    /// Table index (0..3).
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
            Self::HighContrast => 2,
        }
    }
}

keyword_enum! {
    /// A named palette/typography/shape rule-set.
    pub enum Variant ("variant") {
        /// Neutral material-style design.
        #[default]
        Default => "default",
        /// ERP-style design: aubergine and teal, dense spacing.
        Odoo => "odoo",
        /// Flat, airy design with large radii and subtle shadows.
        Modern => "modern",
        /// Traditional design: serif headings, small radii, strong shadows.
        Classic => "classic",
    }
}

impl Variant {
    /// Table index (0..4).
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Default => 0,
            Self::Odoo => 1,
            Self::Modern => 2,
            Self::Classic => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
