//! Adjustable presentation parameters.
//!
//! [`Parameters`] is an open record: every field is optional, and an absent
//! field means "use the documented default". The same type doubles as a
//! partial update, because merging is just "present fields win":
//!
//! ```text
//! { fontSize: large }  merged over  { fontSize: medium, spacing: compact }
//!   = { fontSize: large, spacing: compact }
//! ```
//!
//! | Field            | Values                               | Default  |
//! |------------------|--------------------------------------|----------|
//! | `fontSize`       | `small` `medium` `large`             | `medium` |
//! | `spacing`        | `compact` `normal` `comfortable`     | `normal` |
//! | `borderRadius`   | `none` `small` `medium` `large`      | `small`  |
//! | `visualDensity`  | `compact` `medium` `comfortable`     | `medium` |
//! | `motionReduced`  | bool                                 | `false`  |
//! | `enhancedFocus`  | bool                                 | `false`  |
//! | `primaryColor`   | hex color                            | (none)   |
//! | `secondaryColor` | hex color                            | (none)   |

use serde::{Deserialize, Serialize};

use lumen_color::Rgb;

// ---------------------------------------------------------------------------
// Parameter value enums
// ---------------------------------------------------------------------------

keyword_enum! {
    /// Base text size.
    pub enum FontSize ("font size") {
        Small => "small",
        #[default]
        Medium => "medium",
        Large => "large",
    }
}

keyword_enum! {
    /// Base spacing unit.
    pub enum Spacing ("spacing") {
        Compact => "compact",
        #[default]
        Normal => "normal",
        Comfortable => "comfortable",
    }
}

keyword_enum! {
    /// Corner radius of surfaces and controls.
    pub enum BorderRadius ("border radius") {
        None => "none",
        #[default]
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

keyword_enum! {
    /// Control height and padding density.
    pub enum Density ("visual density") {
        Compact => "compact",
        #[default]
        Medium => "medium",
        Comfortable => "comfortable",
    }
}

// ---------------------------------------------------------------------------
// ParameterKey
// ---------------------------------------------------------------------------

keyword_enum! {
    /// The name of one parameter field.
    pub enum ParameterKey ("parameter") {
        #[default]
        FontSize => "fontSize",
        Spacing => "spacing",
        BorderRadius => "borderRadius",
        VisualDensity => "visualDensity",
        MotionReduced => "motionReduced",
        EnhancedFocus => "enhancedFocus",
        PrimaryColor => "primaryColor",
        SecondaryColor => "secondaryColor",
    }
}

impl ParameterKey {
    /// Whether the field holds a boolean.
    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::MotionReduced | Self::EnhancedFocus)
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// The open parameter record.
///
/// Serializes as a flat map of camelCase names to primitive values; absent
/// fields are omitted rather than written as `null`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Parameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_density: Option<Density>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion_reduced: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_focus: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<Rgb>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Rgb>,
}

impl Parameters {
    /// An empty record: every field absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            font_size: None,
            spacing: None,
            border_radius: None,
            visual_density: None,
            motion_reduced: None,
            enhanced_focus: None,
            primary_color: None,
            secondary_color: None,
        }
    }

    /// Every enum and boolean field set to its documented default.
    ///
    /// Color overrides stay absent: they have no default value.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            font_size: Some(FontSize::default()),
            spacing: Some(Spacing::default()),
            border_radius: Some(BorderRadius::default()),
            visual_density: Some(Density::default()),
            motion_reduced: Some(false),
            enhanced_focus: Some(false),
            primary_color: None,
            secondary_color: None,
        }
    }

    /// Whether no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.spacing.is_none()
            && self.border_radius.is_none()
            && self.visual_density.is_none()
            && self.motion_reduced.is_none()
            && self.enhanced_focus.is_none()
            && self.primary_color.is_none()
            && self.secondary_color.is_none()
    }

    /// Shallow merge: fields present in `patch` overwrite, absent fields
    /// keep their current value.
    pub fn merge(&mut self, patch: &Self) {
        if patch.font_size.is_some() {
            self.font_size = patch.font_size;
        }
        if patch.spacing.is_some() {
            self.spacing = patch.spacing;
        }
        if patch.border_radius.is_some() {
            self.border_radius = patch.border_radius;
        }
        if patch.visual_density.is_some() {
            self.visual_density = patch.visual_density;
        }
        if patch.motion_reduced.is_some() {
            self.motion_reduced = patch.motion_reduced;
        }
        if patch.enhanced_focus.is_some() {
            self.enhanced_focus = patch.enhanced_focus;
        }
        if patch.primary_color.is_some() {
            self.primary_color = patch.primary_color;
        }
        if patch.secondary_color.is_some() {
            self.secondary_color = patch.secondary_color;
        }
    }

    /// `self` with `patch` merged over it.
    #[must_use]
    pub fn merged(mut self, patch: &Self) -> Self {
        self.merge(patch);
        self
    }

    // ── Effective values ────────────────────────────────────────────────

    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.font_size.unwrap_or_default()
    }

    #[must_use]
    pub fn spacing(&self) -> Spacing {
        self.spacing.unwrap_or_default()
    }

    #[must_use]
    pub fn border_radius(&self) -> BorderRadius {
        self.border_radius.unwrap_or_default()
    }

    #[must_use]
    pub fn visual_density(&self) -> Density {
        self.visual_density.unwrap_or_default()
    }

    #[must_use]
    pub fn motion_reduced(&self) -> bool {
        self.motion_reduced.unwrap_or(false)
    }

    #[must_use]
    pub fn enhanced_focus(&self) -> bool {
        self.enhanced_focus.unwrap_or(false)
    }

    // ── Field access by name ────────────────────────────────────────────

    /// The present fields as `(key, value)` pairs, in key order.
    ///
    /// Values use their canonical spelling (`large`, `true`, `#714b67`).
    #[must_use]
    pub fn entries(&self) -> Vec<(ParameterKey, String)> {
        ParameterKey::ALL
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
            .collect()
    }

    /// The canonical spelling of one field, if present.
    #[must_use]
    pub fn get(&self, key: ParameterKey) -> Option<String> {
        match key {
            ParameterKey::FontSize => self.font_size.map(|v| v.to_string()),
            ParameterKey::Spacing => self.spacing.map(|v| v.to_string()),
            ParameterKey::BorderRadius => self.border_radius.map(|v| v.to_string()),
            ParameterKey::VisualDensity => self.visual_density.map(|v| v.to_string()),
            ParameterKey::MotionReduced => self.motion_reduced.map(|v| v.to_string()),
            ParameterKey::EnhancedFocus => self.enhanced_focus.map(|v| v.to_string()),
            ParameterKey::PrimaryColor => self.primary_color.map(Rgb::to_hex),
            ParameterKey::SecondaryColor => self.secondary_color.map(Rgb::to_hex),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_record_uses_defaults() {
        let p = Parameters::new();
        assert!(p.is_empty());
        assert_eq!(p.font_size(), FontSize::Medium);
        assert_eq!(p.spacing(), Spacing::Normal);
        assert_eq!(p.border_radius(), BorderRadius::Small);
        assert_eq!(p.visual_density(), Density::Medium);
        assert!(!p.motion_reduced());
        assert!(!p.enhanced_focus());
    }

    #[test]
    fn defaults_are_explicit() {
        let p = Parameters::defaults();
        assert_eq!(p.font_size, Some(FontSize::Medium));
        assert_eq!(p.motion_reduced, Some(false));
        assert_eq!(p.primary_color, None);
        assert!(!p.is_empty());
    }

    #[test]
    fn merge_overwrites_present_fields_only() {
        let mut p = Parameters {
            font_size: Some(FontSize::Medium),
            spacing: Some(Spacing::Compact),
            ..Parameters::new()
        };
        p.merge(&Parameters {
            font_size: Some(FontSize::Large),
            ..Parameters::new()
        });
        assert_eq!(p.font_size, Some(FontSize::Large));
        assert_eq!(p.spacing, Some(Spacing::Compact));
    }

    #[test]
    fn successive_merges_accumulate() {
        let p = Parameters::new()
            .merged(&Parameters {
                motion_reduced: Some(true),
                ..Parameters::new()
            })
            .merged(&Parameters {
                border_radius: Some(BorderRadius::None),
                ..Parameters::new()
            });
        assert_eq!(p.motion_reduced, Some(true));
        assert_eq!(p.border_radius, Some(BorderRadius::None));
    }

    #[test]
    fn merge_empty_patch_is_noop() {
        let before = Parameters::defaults();
        let after = before.clone().merged(&Parameters::new());
        assert_eq!(before, after);
    }

    #[test]
    fn entries_lists_present_fields_in_key_order() {
        let p = Parameters {
            enhanced_focus: Some(true),
            font_size: Some(FontSize::Small),
            primary_color: Some(Rgb::new(0x71, 0x4b, 0x67)),
            ..Parameters::new()
        };
        assert_eq!(
            p.entries(),
            vec![
                (ParameterKey::FontSize, "small".to_string()),
                (ParameterKey::EnhancedFocus, "true".to_string()),
                (ParameterKey::PrimaryColor, "#714b67".to_string()),
            ]
        );
    }

    #[test]
    fn serializes_as_flat_camel_case_map() {
        let p = Parameters {
            font_size: Some(FontSize::Large),
            motion_reduced: Some(true),
            ..Parameters::new()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fontSize": "large", "motionReduced": true })
        );
    }

    #[test]
    fn deserializes_partial_record() {
        let p: Parameters = serde_json::from_str(r#"{ "spacing": "comfortable" }"#).unwrap();
        assert_eq!(p.spacing, Some(Spacing::Comfortable));
        assert_eq!(p.font_size, None);

        let empty: Parameters = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn deserialize_rejects_bad_values() {
        assert!(serde_json::from_str::<Parameters>(r#"{ "fontSize": "huge" }"#).is_err());
        assert!(serde_json::from_str::<Parameters>(r#"{ "motionReduced": "yes" }"#).is_err());
        assert!(serde_json::from_str::<Parameters>(r##"{ "primaryColor": "#12" }"##).is_err());
        assert!(serde_json::from_str::<Parameters>(r#"{ "fontsize": "large" }"#).is_err());
    }

    #[test]
    fn parameter_key_spelling() {
        assert_eq!(ParameterKey::VisualDensity.to_string(), "visualDensity");
        assert_eq!(
            "borderradius".parse::<ParameterKey>().unwrap(),
            ParameterKey::BorderRadius
        );
        assert!(ParameterKey::MotionReduced.is_bool());
        assert!(!ParameterKey::Spacing.is_bool());
    }
}
