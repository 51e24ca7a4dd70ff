//! # lumen-theme — style-token engine
//!
//! Turns a (mode, variant, parameters) triple into a complete bundle of
//! concrete style tokens, and flattens that bundle into named variables for
//! a rendering layer.
//!
//! # Architecture
//!
//! ```text
//! Mode + Variant + Parameters
//!     │
//!     ▼
//! palette.rs:  (variant, mode) → base palette   (one const table)
//!     │
//!     ▼
//! variant.rs:  per-variant rule-set → spacing, radius, typography,
//!              shadows, motion
//!     │
//!     ▼
//! overlay.rs:  ordered pass pipeline
//!              color overrides → high contrast → enhanced focus → reduced motion
//!     │
//!     ▼
//! tokens.rs:   StyleTokens (the resolved bundle)
//!     │
//!     ▼
//! project.rs:  VariableSet (`primary-color`, `spacing-unit`, …)
//! ```
//!
//! [`contrast`] provides the WCAG 2.0 contrast ratio used both by callers
//! validating colors and by the enhanced-focus pass.
//!
//! Generation is a total function: every enum is closed, and every table is
//! a fixed-size array indexed by those enums, so a missing cell is a compile
//! error rather than a runtime fallback.

// Mathematical code mixes small integer/float conversions (ladder steps,
// percentages).
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
// Rule tables are long by nature.
#![allow(clippy::too_many_lines)]

use thiserror::Error;

/// A string did not name any value of a closed keyword enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownValue {
    /// Which enum was being parsed (`"mode"`, `"font size"`, …).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Declare a closed enum whose values have a fixed camelCase spelling.
///
/// The spelling is used for serde, `Display`, and `FromStr` (which is
/// ASCII case-insensitive), so persisted records, projected variables, and
/// CLI arguments all agree.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The canonical spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub mod contrast;
pub mod generate;
pub mod mode;
pub mod overlay;
pub mod palette;
pub mod params;
pub mod project;
pub mod tokens;
pub mod variant;

pub use contrast::{TextSize, WcagLevel, contrast_ratio, has_adequate_contrast};
pub use generate::resolve;
pub use lumen_color::{ColorError, Rgb};
pub use mode::{Mode, Variant};
pub use overlay::Overlay;
pub use params::{BorderRadius, Density, FontSize, ParameterKey, Parameters, Spacing};
pub use project::{VariableSet, project};
pub use tokens::StyleTokens;
