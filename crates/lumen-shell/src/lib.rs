//! # lumen-shell — configuration state and command front-ends
//!
//! - **[`config`]** — `ThemeConfig` (mode, variant, parameters) and its JSON form
//! - **[`persist`]** — `KeyValueStore` slot plus `MemoryStore` / `FileStore`
//! - **[`store`]** — `ThemeStore`: the single owner of the current config,
//!   its derived tokens and variables, and its listeners
//! - **[`options`]** — `:set`-style parameter directives (`fs=large`, `nomr`)
//! - **[`command`]** — phrase interpreter (`"Dunkles Theme aktivieren"`)
//!
//! The store is constructed explicitly and handed to whoever needs it.
//! Nothing here is global.

pub mod command;
pub mod config;
pub mod options;
pub mod persist;
pub mod store;

pub use command::{Command, Interpreter};
pub use config::ThemeConfig;
pub use options::{Directive, OptionError, apply_directives, parse_directives};
pub use persist::{FileStore, KeyValueStore, MemoryStore, PersistError, STORAGE_KEY};
pub use store::{ListenerId, ThemeStore};
