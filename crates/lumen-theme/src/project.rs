//! Projection of a token bundle onto flat, named style variables.
//!
//! The rendering layer consumes variables, not tokens. Every value is a
//! ready-to-use CSS string (`8px`, `#714b67`, `none`), and every name is
//! stable: renderers bind to `primary-color`, never to a struct path.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::tokens::StyleTokens;

/// A name → value map of style variables, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableSet(BTreeMap<String, String>);

impl VariableSet {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: impl ToString) {
        self.0.insert(name.to_string(), value.to_string());
    }

    /// Render as a CSS rule of custom properties.
    ///
    /// ```text
    /// :root {
    ///   --background-color: #fafafa;
    ///   ...
    /// }
    /// ```
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::with_capacity(self.0.len() * 40);
        let _ = writeln!(out, "{selector} {{");
        for (name, value) in &self.0 {
            let _ = writeln!(out, "  --{name}: {value};");
        }
        out.push_str("}\n");
        out
    }
}

fn px(v: impl std::fmt::Display) -> String {
    format!("{v}px")
}

fn ms(v: u16) -> String {
    format!("{v}ms")
}

/// Flatten a bundle into variables.
#[must_use]
pub fn project(tokens: &StyleTokens) -> VariableSet {
    let mut vars = VariableSet::default();

    let p = &tokens.palette;
    vars.insert("primary-color", p.primary);
    vars.insert("secondary-color", p.secondary);
    vars.insert("background-color", p.background);
    vars.insert("paper-color", p.paper);
    vars.insert("text-primary-color", p.text_primary);
    vars.insert("text-secondary-color", p.text_secondary);
    vars.insert("divider-color", p.divider);

    vars.insert("spacing-unit", px(tokens.spacing_unit));
    vars.insert("border-radius", px(tokens.radius));
    vars.insert("control-height", px(tokens.control_height));

    let t = &tokens.typography;
    vars.insert("font-family", t.family);
    vars.insert("font-size-base", px(t.base_size));
    for (i, size) in t.headings.iter().enumerate() {
        vars.insert(&format!("font-size-h{}", i + 1), px(size));
    }
    vars.insert("heading-font-weight", t.heading_weight);
    vars.insert("button-text-transform", t.button_case.css());

    for (level, shadow) in tokens.shadows.iter().enumerate() {
        vars.insert(&format!("shadow-{level}"), shadow);
    }

    let f = &tokens.focus;
    vars.insert("focus-outline-width", px(f.outline_width));
    vars.insert("focus-outline-offset", px(f.outline_offset));
    vars.insert("focus-outline-color", f.outline_color);
    vars.insert("border-width", px(f.border_width));

    let m = &tokens.motion;
    vars.insert("transition-duration-shortest", ms(m.shortest));
    vars.insert("transition-duration-short", ms(m.short));
    vars.insert("transition-duration-standard", ms(m.standard));
    vars.insert("transition-duration-complex", ms(m.complex));
    vars.insert("transition-easing", m.easing);

    vars.insert("theme-mode", tokens.mode);
    vars.insert("theme-variant", tokens.variant);

    vars
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
