//! The configuration record.
//!
//! ```json
//! { "mode": "dark", "variant": "odoo", "parameters": { "fontSize": "large" } }
//! ```
//!
//! Exactly three top-level fields are allowed, all required. A record
//! missing one, adding another, naming an unknown mode or variant, or
//! carrying an unknown parameter is rejected as a whole. Fields absent from `parameters` are fine: that record is
//! open by design.

use serde::{Deserialize, Serialize};

use lumen_theme::{Mode, Parameters, Variant};

/// Current or persisted theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub mode: Mode,
    pub variant: Variant,
    pub parameters: Parameters,
}

impl Default for ThemeConfig {
    /// Light mode, default variant, every parameter at its documented
    /// default, no color overrides.
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            variant: Variant::default(),
            parameters: Parameters::defaults(),
        }
    }
}

impl ThemeConfig {
    /// Parse a persisted record.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not a complete, valid record.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Serialize for persistence.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
