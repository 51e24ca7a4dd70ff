//! Phrase interpreter — short German or English instructions to commands.
//!
//! Input is normalized (lower-cased, punctuation and runs of whitespace
//! collapsed to one space, trimmed) and then checked against an ordered
//! rule table. A rule holds keyword alternatives; an alternative matches
//! when every one of its keywords occurs in the text. The first matching
//! rule wins.
//!
//! # Rule groups, in order
//!
//! | Group     | Examples                                          | Command            |
//! |-----------|---------------------------------------------------|--------------------|
//! | mode      | `hell`, `dunkel`, `kontrast`, `barrierefreiheit`  | `Mode(..)`         |
//! | variant   | `standard`, `odoo`, `modern`, `klassisch`         | `Variant(..)`      |
//! | parameter | `schrift + größer`, `kompakt`, `keine rundung`    | `Parameter(patch)` |
//! | reset     | `zurücksetzen`, `reset`                           | `Reset`            |
//!
//! Because mode is checked first, "Dunkles Theme mit hohem Kontrast" is a
//! dark-mode command. Within the parameter group the specific radius rule
//! (`keine rundung`) sits before the general one (`rund`).

use std::sync::LazyLock;

use regex::Regex;

use lumen_theme::{BorderRadius, FontSize, Mode, Parameters, Spacing, Variant};

use crate::persist::KeyValueStore;
use crate::store::ThemeStore;

/// Reply when no rule matches.
pub const NOT_UNDERSTOOD: &str =
    "Sorry, I did not understand that. Try one of the suggested phrases.";

/// Reply when a matched command could not be carried out.
pub const NOT_EXECUTED: &str = "That command could not be executed.";

/// A recognized instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mode(Mode),
    Variant(Variant),
    /// Parameter patch, merged into the current parameters.
    Parameter(Parameters),
    Reset,
}

impl Command {
    /// Confirmation shown after the command was applied.
    #[must_use]
    pub fn confirmation(&self) -> String {
        match self {
            Self::Mode(Mode::Light) => "Switched to light mode.".to_string(),
            Self::Mode(Mode::Dark) => "Switched to dark mode.".to_string(),
            Self::Mode(Mode::HighContrast) => "Switched to high-contrast mode.".to_string(),
            Self::Variant(v) => format!("Switched to the {v} variant."),
            Self::Parameter(patch) => {
                let changes: Vec<String> = patch
                    .entries()
                    .into_iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect();
                format!("Updated {}.", changes.join(", "))
            }
            Self::Reset => "Theme reset to defaults.".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// One entry of the rule table.
#[derive(Debug)]
pub struct Rule {
    /// Keyword alternatives. One alternative matches when all of its
    /// keywords occur in the normalized text.
    pub any_of: &'static [&'static [&'static str]],
    pub command: Command,
    /// Phrases this rule is known to accept, for suggestion lists.
    pub examples: &'static [&'static str],
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        self.any_of
            .iter()
            .any(|all_of| all_of.iter().all(|kw| text.contains(kw)))
    }
}

const fn patch(p: Parameters) -> Command {
    Command::Parameter(p)
}

/// The built-in rule table.
pub static RULES: &[Rule] = &[
    // ── Mode ────────────────────────────────────────────────────────────
    Rule {
        any_of: &[&["light"], &["hell"]],
        command: Command::Mode(Mode::Light),
        examples: &["Helles Theme aktivieren", "Switch to light mode"],
    },
    Rule {
        any_of: &[&["dark"], &["dunkel"], &["dunkl"]],
        command: Command::Mode(Mode::Dark),
        examples: &["Dunkles Theme aktivieren", "Activate dark mode"],
    },
    Rule {
        any_of: &[&["contrast"], &["kontrast"], &["barrierefreiheit"]],
        command: Command::Mode(Mode::HighContrast),
        examples: &["Hohen Kontrast aktivieren", "Enable high contrast"],
    },
    // ── Variant ─────────────────────────────────────────────────────────
    Rule {
        any_of: &[&["standard"], &["default", "variant"]],
        command: Command::Variant(Variant::Default),
        examples: &["Standard-Variante einstellen", "Use the default variant"],
    },
    Rule {
        any_of: &[&["odoo"]],
        command: Command::Variant(Variant::Odoo),
        examples: &["Odoo-Variante einstellen", "Switch to odoo"],
    },
    Rule {
        any_of: &[&["modern"]],
        command: Command::Variant(Variant::Modern),
        examples: &["Moderne Variante einstellen", "Use the modern look"],
    },
    Rule {
        any_of: &[&["classic"], &["klassisch"]],
        command: Command::Variant(Variant::Classic),
        examples: &["Klassische Variante einstellen", "Use the classic variant"],
    },
    // ── Parameter ───────────────────────────────────────────────────────
    Rule {
        any_of: &[
            &["schrift", "größer"],
            &["schrift", "erhöh"],
            &["font", "larger"],
            &["font", "bigger"],
            &["font", "increase"],
            &["text", "larger"],
            &["text", "bigger"],
        ],
        command: patch(Parameters {
            font_size: Some(FontSize::Large),
            ..Parameters::new()
        }),
        examples: &["Schriftgröße erhöhen", "Make the font larger"],
    },
    Rule {
        any_of: &[
            &["schrift", "kleiner"],
            &["schrift", "verringer"],
            &["font", "smaller"],
            &["font", "decrease"],
            &["text", "smaller"],
        ],
        command: patch(Parameters {
            font_size: Some(FontSize::Small),
            ..Parameters::new()
        }),
        examples: &["Schrift verkleinern", "Make the font smaller"],
    },
    Rule {
        any_of: &[&["kompakt"], &["compact"]],
        command: patch(Parameters {
            spacing: Some(Spacing::Compact),
            ..Parameters::new()
        }),
        examples: &["Kompakte Abstände einstellen", "Compact spacing"],
    },
    Rule {
        any_of: &[&["komfortab"], &["comfortable"], &["großzügig"]],
        command: patch(Parameters {
            spacing: Some(Spacing::Comfortable),
            ..Parameters::new()
        }),
        examples: &["Komfortable Abstände einstellen", "Comfortable spacing"],
    },
    Rule {
        any_of: &[
            &["eckig"],
            &["keine rundung"],
            &["ohne rundung"],
            &["square"],
            &["sharp", "corner"],
        ],
        command: patch(Parameters {
            border_radius: Some(BorderRadius::None),
            ..Parameters::new()
        }),
        examples: &["Eckige Kanten einstellen", "Square corners"],
    },
    Rule {
        any_of: &[&["rund"], &["rounded"]],
        command: patch(Parameters {
            border_radius: Some(BorderRadius::Large),
            ..Parameters::new()
        }),
        examples: &["Runde Ecken aktivieren", "Rounded corners"],
    },
    Rule {
        any_of: &[&["bewegung"], &["animation"], &["motion"]],
        command: patch(Parameters {
            motion_reduced: Some(true),
            ..Parameters::new()
        }),
        examples: &["Bewegungen reduzieren", "Reduce motion"],
    },
    Rule {
        any_of: &[&["fokus"], &["focus"]],
        command: patch(Parameters {
            enhanced_focus: Some(true),
            ..Parameters::new()
        }),
        examples: &["Fokus hervorheben", "Enhance focus"],
    },
    // ── Reset ───────────────────────────────────────────────────────────
    Rule {
        any_of: &[&["zurücksetzen"], &["zuruecksetzen"], &["reset"]],
        command: Command::Reset,
        examples: &["Theme zurücksetzen", "Reset theme"],
    },
];

/// Punctuation and whitespace runs, collapsed to a single space.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s.,;:!?]+").expect("separator regex"));

/// Lower-case, collapse separators, trim.
#[must_use]
pub fn normalize(text: &str) -> String {
    SEPARATORS
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// Interpreter
// ---------------------------------------------------------------------------

/// Maps phrases to commands and commands to store mutations.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter {
    rules: &'static [Rule],
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter over the built-in [`RULES`].
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: RULES }
    }

    /// An interpreter over a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// The first rule matching `text`, as a command.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<Command> {
        let text = normalize(text);
        if text.is_empty() {
            return None;
        }
        let rule = self.rules.iter().find(|r| r.matches(&text))?;
        log::debug!("{text:?} -> {:?}", rule.command);
        Some(rule.command.clone())
    }

    /// Apply `command` to `store`. Returns `false` and leaves the store
    /// untouched if the command carries nothing to apply.
    pub fn execute<S: KeyValueStore>(&self, store: &mut ThemeStore<S>, command: &Command) -> bool {
        match command {
            Command::Mode(mode) => store.set_mode(*mode),
            Command::Variant(variant) => store.set_variant(*variant),
            Command::Parameter(patch) => {
                if patch.is_empty() {
                    log::debug!("ignoring empty parameter patch");
                    return false;
                }
                store.update_parameters(patch);
            }
            Command::Reset => store.reset(),
        }
        true
    }

    /// Parse and execute `text`, returning the reply to show.
    pub fn process_text<S: KeyValueStore>(&self, store: &mut ThemeStore<S>, text: &str) -> String {
        let Some(command) = self.parse(text) else {
            return NOT_UNDERSTOOD.to_string();
        };
        if self.execute(store, &command) {
            command.confirmation()
        } else {
            NOT_EXECUTED.to_string()
        }
    }

    /// Example phrases, in rule order.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.examples.iter().copied())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
