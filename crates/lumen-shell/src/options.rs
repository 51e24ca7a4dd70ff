//! Parameter directives — the `set` syntax of the CLI and REPL.
//!
//! # Supported syntax
//!
//! | Syntax          | Effect                          |
//! |-----------------|---------------------------------|
//! | `name=value`    | Assign a value                  |
//! | `name`          | Enable a boolean parameter      |
//! | `noname`        | Disable a boolean parameter     |
//! | `name!`         | Toggle a boolean parameter      |
//!
//! # Parameter names
//!
//! Both full names and abbreviations are accepted (case-insensitive):
//!
//! | Full name        | Abbrev | Type    | Default  |
//! |------------------|--------|---------|----------|
//! | `fontSize`       | `fs`   | enum    | `medium` |
//! | `spacing`        | `sp`   | enum    | `normal` |
//! | `borderRadius`   | `br`   | enum    | `small`  |
//! | `visualDensity`  | `vd`   | enum    | `medium` |
//! | `motionReduced`  | `mr`   | bool    | false    |
//! | `enhancedFocus`  | `ef`   | bool    | false    |
//! | `primaryColor`   | `pc`   | color   | none     |
//! | `secondaryColor` | `sc`   | color   | none     |

use thiserror::Error;

use lumen_theme::{ColorError, ParameterKey, Parameters, UnknownValue};

/// A parsed directive. Names are kept as typed so errors can echo them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `name` — enable a boolean parameter.
    On(String),

    /// `noname` — disable a boolean parameter.
    Off(String),

    /// `name!` — toggle a boolean parameter.
    Toggle(String),

    /// `name=value` — assign a value.
    Assign(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown parameter: {0}")]
    UnknownName(String),

    #[error("{0} is not a boolean parameter; use {0}=<value>")]
    NotBoolean(String),

    #[error("invalid value for {name}: {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: UnknownValue,
    },

    #[error("invalid color for {name}: {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ColorError,
    },
}

/// Resolve a full name or abbreviation.
#[must_use]
pub fn lookup(name: &str) -> Option<ParameterKey> {
    let key = match name.to_ascii_lowercase().as_str() {
        "fs" => ParameterKey::FontSize,
        "sp" => ParameterKey::Spacing,
        "br" => ParameterKey::BorderRadius,
        "vd" => ParameterKey::VisualDensity,
        "mr" => ParameterKey::MotionReduced,
        "ef" => ParameterKey::EnhancedFocus,
        "pc" => ParameterKey::PrimaryColor,
        "sc" => ParameterKey::SecondaryColor,
        _ => return name.parse().ok(),
    };
    Some(key)
}

/// Returns `true` if `name` names a boolean parameter.
#[must_use]
pub fn is_bool_parameter(name: &str) -> bool {
    lookup(name).is_some_and(ParameterKey::is_bool)
}

/// Parse whitespace-separated directives (`fs=large nomr ef!`).
#[must_use]
pub fn parse_directives(args: &str) -> Vec<Directive> {
    args.split_whitespace().map(parse_directive).collect()
}

/// Parse a single directive.
#[must_use]
pub fn parse_directive(arg: &str) -> Directive {
    if let Some((name, value)) = arg.split_once('=') {
        return Directive::Assign(name.to_string(), value.to_string());
    }

    if let Some(name) = arg.strip_suffix('!') {
        return Directive::Toggle(name.to_string());
    }

    // `noname` only when the rest is a boolean parameter, so a future
    // parameter whose name starts with "no" isn't split.
    if let Some(name) = arg.strip_prefix("no") {
        if is_bool_parameter(name) {
            return Directive::Off(name.to_string());
        }
    }

    Directive::On(arg.to_string())
}

/// Apply `directives` on top of `current`, returning only the changed
/// fields as a patch suitable for `ThemeStore::update_parameters`.
///
/// Toggles read from `current` and from earlier directives in the same
/// list, so `ef! ef!` is a no-op.
///
/// # Errors
///
/// Returns an [`OptionError`] for the first directive naming an unknown
/// parameter, using a non-boolean as a flag, or carrying an invalid value.
pub fn apply_directives(
    current: &Parameters,
    directives: &[Directive],
) -> Result<Parameters, OptionError> {
    let mut patch = Parameters::new();
    for d in directives {
        let effective = current.clone().merged(&patch);
        match d {
            Directive::On(name) => set_bool(&mut patch, name, |_| true)?,
            Directive::Off(name) => set_bool(&mut patch, name, |_| false)?,
            Directive::Toggle(name) => set_bool(&mut patch, name, |key| match key {
                ParameterKey::MotionReduced => !effective.motion_reduced(),
                _ => !effective.enhanced_focus(),
            })?,
            Directive::Assign(name, value) => assign(&mut patch, name, value)?,
        }
    }
    Ok(patch)
}

fn set_bool(
    patch: &mut Parameters,
    name: &str,
    value: impl FnOnce(ParameterKey) -> bool,
) -> Result<(), OptionError> {
    let key = lookup(name).ok_or_else(|| OptionError::UnknownName(name.to_string()))?;
    match key {
        ParameterKey::MotionReduced => patch.motion_reduced = Some(value(key)),
        ParameterKey::EnhancedFocus => patch.enhanced_focus = Some(value(key)),
        _ => return Err(OptionError::NotBoolean(name.to_string())),
    }
    Ok(())
}

fn assign(patch: &mut Parameters, name: &str, value: &str) -> Result<(), OptionError> {
    let key = lookup(name).ok_or_else(|| OptionError::UnknownName(name.to_string()))?;
    let invalid = |source| OptionError::InvalidValue {
        name: name.to_string(),
        source,
    };
    let bad_color = |source| OptionError::InvalidColor {
        name: name.to_string(),
        source,
    };
    match key {
        ParameterKey::FontSize => patch.font_size = Some(value.parse().map_err(invalid)?),
        ParameterKey::Spacing => patch.spacing = Some(value.parse().map_err(invalid)?),
        ParameterKey::BorderRadius => patch.border_radius = Some(value.parse().map_err(invalid)?),
        ParameterKey::VisualDensity => {
            patch.visual_density = Some(value.parse().map_err(invalid)?);
        }
        ParameterKey::MotionReduced => patch.motion_reduced = Some(parse_bool(value).map_err(invalid)?),
        ParameterKey::EnhancedFocus => patch.enhanced_focus = Some(parse_bool(value).map_err(invalid)?),
        ParameterKey::PrimaryColor => patch.primary_color = Some(value.parse().map_err(bad_color)?),
        ParameterKey::SecondaryColor => {
            patch.secondary_color = Some(value.parse().map_err(bad_color)?);
        }
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, UnknownValue> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(UnknownValue {
            kind: "boolean",
            value: value.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::{BorderRadius, FontSize, Rgb, Spacing};
    use pretty_assertions::assert_eq;

    // ── parse_directive ─────────────────────────────────────────────

    #[test]
    fn parse_assign() {
        assert_eq!(
            parse_directive("fs=large"),
            Directive::Assign("fs".into(), "large".into())
        );
        assert_eq!(
            parse_directive("primaryColor=#ff6f00"),
            Directive::Assign("primaryColor".into(), "#ff6f00".into())
        );
    }

    #[test]
    fn parse_on_off_toggle() {
        assert_eq!(parse_directive("mr"), Directive::On("mr".into()));
        assert_eq!(parse_directive("nomr"), Directive::Off("mr".into()));
        assert_eq!(
            parse_directive("noenhancedFocus"),
            Directive::Off("enhancedFocus".into())
        );
        assert_eq!(parse_directive("ef!"), Directive::Toggle("ef".into()));
    }

    #[test]
    fn no_prefix_only_for_booleans() {
        // "nofs" is not Off("fs"): fontSize isn't boolean.
        assert_eq!(parse_directive("nofs"), Directive::On("nofs".into()));
    }

    #[test]
    fn parse_multiple() {
        assert_eq!(
            parse_directives("  fs=small   nomr ef! "),
            vec![
                Directive::Assign("fs".into(), "small".into()),
                Directive::Off("mr".into()),
                Directive::Toggle("ef".into()),
            ]
        );
        assert!(parse_directives("").is_empty());
    }

    // ── lookup ──────────────────────────────────────────────────────

    #[test]
    fn names_and_abbreviations() {
        assert_eq!(lookup("fs"), Some(ParameterKey::FontSize));
        assert_eq!(lookup("FS"), Some(ParameterKey::FontSize));
        assert_eq!(lookup("fontsize"), Some(ParameterKey::FontSize));
        assert_eq!(lookup("borderRadius"), Some(ParameterKey::BorderRadius));
        assert_eq!(lookup("sc"), Some(ParameterKey::SecondaryColor));
        assert_eq!(lookup("glow"), None);
        assert!(is_bool_parameter("ef"));
        assert!(!is_bool_parameter("vd"));
    }

    // ── apply_directives ────────────────────────────────────────────

    #[test]
    fn apply_builds_patch() {
        let patch = apply_directives(
            &Parameters::defaults(),
            &parse_directives("fs=large sp=compact br=none mr pc=#f60"),
        )
        .unwrap();
        assert_eq!(patch.font_size, Some(FontSize::Large));
        assert_eq!(patch.spacing, Some(Spacing::Compact));
        assert_eq!(patch.border_radius, Some(BorderRadius::None));
        assert_eq!(patch.motion_reduced, Some(true));
        assert_eq!(patch.primary_color, Some(Rgb::new(0xff, 0x66, 0x00)));
        // Untouched fields stay absent.
        assert_eq!(patch.visual_density, None);
    }

    #[test]
    fn toggle_reads_current_and_earlier_directives() {
        let mut current = Parameters::defaults();
        current.enhanced_focus = Some(true);
        let once = apply_directives(&current, &parse_directives("ef!")).unwrap();
        assert_eq!(once.enhanced_focus, Some(false));
        let twice = apply_directives(&current, &parse_directives("ef! ef!")).unwrap();
        assert_eq!(twice.enhanced_focus, Some(true));
    }

    #[test]
    fn bool_assignment_spellings() {
        let p = apply_directives(&Parameters::new(), &parse_directives("mr=on ef=false")).unwrap();
        assert_eq!(p.motion_reduced, Some(true));
        assert_eq!(p.enhanced_focus, Some(false));
    }

    #[test]
    fn errors() {
        let d = Parameters::defaults();
        assert_eq!(
            apply_directives(&d, &parse_directives("glow=on")),
            Err(OptionError::UnknownName("glow".into()))
        );
        assert_eq!(
            apply_directives(&d, &parse_directives("fs")),
            Err(OptionError::NotBoolean("fs".into()))
        );
        assert!(matches!(
            apply_directives(&d, &parse_directives("fs=huge")),
            Err(OptionError::InvalidValue { .. })
        ));
        assert!(matches!(
            apply_directives(&d, &parse_directives("pc=#12345")),
            Err(OptionError::InvalidColor { .. })
        ));
        assert!(matches!(
            apply_directives(&d, &parse_directives("mr=maybe")),
            Err(OptionError::InvalidValue { .. })
        ));
    }
}
