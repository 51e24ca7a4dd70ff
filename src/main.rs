// SPDX-License-Identifier: MIT
//
// lumen — command-line front-end for the theme configuration engine.
//
// This is the main binary that wires together all the crates:
//
//   lumen-color → hex parsing, sRGB math
//   lumen-theme → (mode, variant, parameters) → tokens → variables
//   lumen-shell → persisted store, `set` directives, phrase interpreter
//
// Every subcommand opens the store (file-backed unless --memory), does one
// thing, and exits. `repl` keeps the store open and reads one instruction
// per line:
//
//   stdin → line → set-directive | built-in | phrase → store mutation
//   store → resolve → project → printed reply

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use lumen_shell::{
    FileStore, Interpreter, KeyValueStore, MemoryStore, ThemeStore, apply_directives,
    parse_directives,
};
use lumen_theme::contrast::audit;
use lumen_theme::{Mode, TextSize, Variant, WcagLevel, contrast_ratio, has_adequate_contrast};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "lumen",
    about = "Theme configuration engine: modes, variants, accessibility overlays",
    version
)]
struct Cli {
    /// Directory holding the persisted configuration
    #[arg(long, env = "LUMEN_STATE_DIR", default_value = ".lumen", global = true)]
    state_dir: PathBuf,

    /// Keep state in memory only; nothing is read or written
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the current configuration.
    Show {
        /// Print the persisted JSON record instead
        #[arg(long)]
        json: bool,
    },

    /// Print the projected style variables.
    Vars {
        /// Render as a CSS custom-property block
        #[arg(long)]
        css: bool,
    },

    /// Interpret a phrase, e.g. "Dunkles Theme aktivieren".
    Say {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Apply parameter directives, e.g. `fs=large nomr ef!`.
    Set {
        #[arg(required = true, num_args = 1..)]
        directives: Vec<String>,
    },

    /// Switch display mode.
    Mode { mode: Mode },

    /// Switch visual variant.
    Variant { variant: Variant },

    /// Return to the default configuration.
    Reset,

    /// Contrast ratio between two hex colors.
    Contrast {
        foreground: String,
        background: String,

        /// Conformance level to check against (AA or AAA)
        #[arg(long, default_value = "AA")]
        level: WcagLevel,

        /// Check with the large-text threshold
        #[arg(long)]
        large: bool,
    },

    /// Contrast report for every text/surface pairing of the current theme.
    Audit,

    /// List example phrases for `say`.
    Suggest,

    /// Read instructions from stdin, one per line.
    Repl,
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

fn run<S: KeyValueStore>(
    command: Commands,
    store: &mut ThemeStore<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let interp = Interpreter::new();
    match command {
        Commands::Show { json: true } => {
            writeln!(out, "{}", serde_json::to_string_pretty(&store.get())?)?;
        }
        Commands::Show { json: false } => show(store, out)?,
        Commands::Vars { css } => vars(store, css, out)?,
        Commands::Say { words } => {
            let reply = interp.process_text(store, &words.join(" "));
            writeln!(out, "{reply}")?;
        }
        Commands::Set { directives } => set(store, &directives.join(" "), out)?,
        Commands::Mode { mode } => {
            store.set_mode(mode);
            writeln!(out, "mode: {mode}")?;
        }
        Commands::Variant { variant } => {
            store.set_variant(variant);
            writeln!(out, "variant: {variant}")?;
        }
        Commands::Reset => {
            store.reset();
            writeln!(out, "reset to defaults")?;
        }
        Commands::Contrast {
            foreground,
            background,
            level,
            large,
        } => {
            let size = if large { TextSize::Large } else { TextSize::Normal };
            let ratio = contrast_ratio(&foreground, &background)?;
            let ok = has_adequate_contrast(&foreground, &background, level, size)?;
            let verdict = if ok { "pass" } else { "fail" };
            writeln!(out, "{ratio:.2}:1 {level} {size}: {verdict}")?;
        }
        Commands::Audit => {
            for check in audit(store.tokens()) {
                let mark = |level| if check.passes(level) { "ok" } else { "--" };
                writeln!(
                    out,
                    "{:<28} {} on {}  {:>5.2}:1  AA {}  AAA {}",
                    check.pair,
                    check.foreground,
                    check.background,
                    check.ratio,
                    mark(WcagLevel::Aa),
                    mark(WcagLevel::Aaa),
                )?;
            }
        }
        Commands::Suggest => {
            for phrase in interp.suggestions() {
                writeln!(out, "{phrase}")?;
            }
        }
        Commands::Repl => repl(store, &interp, input, out)?,
    }
    Ok(())
}

fn show<S: KeyValueStore>(store: &ThemeStore<S>, out: &mut impl Write) -> Result<()> {
    let config = store.get();
    writeln!(out, "mode:    {}", config.mode)?;
    writeln!(out, "variant: {}", config.variant)?;
    for (key, value) in config.parameters.entries() {
        writeln!(out, "  {key:<15} {value}")?;
    }
    Ok(())
}

fn vars<S: KeyValueStore>(store: &ThemeStore<S>, css: bool, out: &mut impl Write) -> Result<()> {
    let vars = store.variables();
    if css {
        write!(out, "{}", vars.to_css(":root"))?;
    } else {
        for (name, value) in vars.iter() {
            writeln!(out, "{name}: {value}")?;
        }
    }
    Ok(())
}

fn set<S: KeyValueStore>(store: &mut ThemeStore<S>, args: &str, out: &mut impl Write) -> Result<()> {
    let directives = parse_directives(args);
    if directives.is_empty() {
        bail!("no directives given");
    }
    let patch = apply_directives(&store.get().parameters, &directives)?;
    store.update_parameters(&patch);
    for (key, value) in patch.entries() {
        writeln!(out, "{key}={value}")?;
    }
    Ok(())
}

// ─── REPL ───────────────────────────────────────────────────────────────────

/// Built-in REPL words; anything else is a `set` line or a phrase.
fn repl<S: KeyValueStore>(
    store: &mut ThemeStore<S>,
    interp: &Interpreter,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim();
        match line {
            "" => {}
            "quit" | "exit" => return Ok(()),
            "show" => show(store, out)?,
            "vars" => vars(store, false, out)?,
            "css" => vars(store, true, out)?,
            "help" => {
                writeln!(out, "show | vars | css | set <directives> | quit")?;
                writeln!(out, "or a phrase, e.g.:")?;
                for phrase in interp.suggestions() {
                    writeln!(out, "  {phrase}")?;
                }
            }
            _ => {
                if let Some(args) = line.strip_prefix("set ") {
                    // A bad directive is reported, not fatal.
                    if let Err(e) = set(store, args, out) {
                        writeln!(out, "error: {e}")?;
                    }
                } else {
                    writeln!(out, "{}", interp.process_text(store, line))?;
                }
            }
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn start(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.memory {
        let mut store = ThemeStore::new(MemoryStore::new());
        run(cli.command, &mut store, &mut input, &mut out)
    } else {
        log::debug!("state directory {}", cli.state_dir.display());
        let mut store = ThemeStore::new(FileStore::new(&cli.state_dir));
        run(cli.command, &mut store, &mut input, &mut out)
            .with_context(|| format!("state directory {}", cli.state_dir.display()))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = start(Cli::parse()) {
        eprintln!("lumen: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
