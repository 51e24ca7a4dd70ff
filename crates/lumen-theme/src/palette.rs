//! Palette roles and the (variant, mode) palette table.
//!
//! Every variant defines a palette for every mode. The table is a
//! `[[Palette; 3]; 4]` indexed by [`Variant`] then [`Mode`], so leaving a
//! cell out is a compile error rather than a runtime fallback.
//!
//! The high-contrast cells are the variant's own attempt at a high-contrast
//! look. They are only visible through [`base_palette`]: the high-contrast
//! overlay replaces them with [`HIGH_CONTRAST`] during resolution.

use serde::Serialize;

use lumen_color::Rgb;

use crate::mode::{Mode, Variant};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The semantic color roles of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    // ── Brand ─────────────────────────────────────────────────
    /// Primary brand color: buttons, links, focus rings.
    pub primary: Rgb,
    /// Secondary accent.
    pub secondary: Rgb,

    // ── Surfaces ──────────────────────────────────────────────
    /// Page background.
    pub background: Rgb,
    /// Card / panel surface.
    pub paper: Rgb,

    // ── Text ──────────────────────────────────────────────────
    /// Body text.
    pub text_primary: Rgb,
    /// Captions, helper text.
    pub text_secondary: Rgb,

    /// Separators and outlines.
    pub divider: Rgb,
}

impl Palette {
    /// Role names paired with their colors, in declaration order.
    #[must_use]
    pub const fn roles(&self) -> [(&'static str, Rgb); 7] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("paper", self.paper),
            ("text-primary", self.text_primary),
            ("text-secondary", self.text_secondary),
            ("divider", self.divider),
        ]
    }
}

/// Build a palette from packed `0xRRGGBB` values, in role order.
const fn palette(
    primary: u32,
    secondary: u32,
    background: u32,
    paper: u32,
    text_primary: u32,
    text_secondary: u32,
    divider: u32,
) -> Palette {
    Palette {
        primary: Rgb::from_u32(primary),
        secondary: Rgb::from_u32(secondary),
        background: Rgb::from_u32(background),
        paper: Rgb::from_u32(paper),
        text_primary: Rgb::from_u32(text_primary),
        text_secondary: Rgb::from_u32(text_secondary),
        divider: Rgb::from_u32(divider),
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The fixed maximum-contrast scheme applied by the high-contrast overlay.
///
/// White text on black, yellow for interactive and secondary emphasis.
pub const HIGH_CONTRAST: Palette = Palette {
    primary: Rgb::YELLOW,
    secondary: Rgb::WHITE,
    background: Rgb::BLACK,
    paper: Rgb::BLACK,
    text_primary: Rgb::WHITE,
    text_secondary: Rgb::YELLOW,
    divider: Rgb::WHITE,
};

//                 primary   secondary background paper    text-1    text-2    divider
const PALETTES: [[Palette; 3]; 4] = [
    // default
    [
        palette(0x1976d2, 0x9c27b0, 0xf5f5f5, 0xffffff, 0x212121, 0x616161, 0xe0e0e0),
        palette(0x90caf9, 0xce93d8, 0x121212, 0x1e1e1e, 0xffffff, 0xb0b0b0, 0x333333),
        palette(0x00e5ff, 0xea80fc, 0x000000, 0x0a0a0a, 0xffffff, 0xe0e0e0, 0xffffff),
    ],
    // odoo
    [
        palette(0x714b67, 0x017e84, 0xf9fafb, 0xffffff, 0x212529, 0x5c636a, 0xdee2e6),
        palette(0xc49bbb, 0x4fb3b8, 0x1b1d26, 0x262a36, 0xe4e4e4, 0x9a9ca5, 0x3c3f4c),
        palette(0xf0a6de, 0x5ee0e6, 0x000000, 0x000000, 0xffffff, 0xe0e0e0, 0xffffff),
    ],
    // modern
    [
        palette(0x3b82f6, 0xec4899, 0xf8fafc, 0xffffff, 0x0f172a, 0x475569, 0xe2e8f0),
        palette(0x60a5fa, 0xf472b6, 0x0f172a, 0x1e293b, 0xf1f5f9, 0x94a3b8, 0x334155),
        palette(0x93c5fd, 0xf9a8d4, 0x000000, 0x020617, 0xffffff, 0xe2e8f0, 0xf1f5f9),
    ],
    // classic
    [
        palette(0x2c5282, 0x975a16, 0xf0ede6, 0xfffdf8, 0x1a202c, 0x4a5568, 0xcbd5e0),
        palette(0x90cdf4, 0xf6ad55, 0x1a202c, 0x2d3748, 0xf7fafc, 0xa0aec0, 0x4a5568),
        palette(0xbee3f8, 0xfbd38d, 0x000000, 0x000000, 0xffffff, 0xedf2f7, 0xffffff),
    ],
];

/// The variant's own palette for `mode`, before any overlay.
#[must_use]
pub const fn base_palette(variant: Variant, mode: Mode) -> Palette {
    PALETTES[variant.index()][mode.index()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
