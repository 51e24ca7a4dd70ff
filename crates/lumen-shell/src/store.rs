//! The configuration store.
//!
//! [`ThemeStore`] owns the current [`ThemeConfig`] together with what is
//! derived from it: the resolved [`StyleTokens`] and the projected
//! [`VariableSet`]. Every mutator follows the same sequence:
//!
//! ```text
//! change config → persist (failure logged) → resolve + project → notify
//! ```
//!
//! Listeners get shared references only. Mutation needs `&mut ThemeStore`,
//! which a listener cannot hold while the store is notifying, so a listener
//! can never trigger a nested update.

use lumen_theme::{Mode, Parameters, StyleTokens, Variant, VariableSet, project, resolve};

use crate::config::ThemeConfig;
use crate::persist::{KeyValueStore, STORAGE_KEY};

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ThemeConfig, &VariableSet)>;

/// Owner of the current theme configuration.
pub struct ThemeStore<S: KeyValueStore> {
    storage: S,
    config: ThemeConfig,
    tokens: StyleTokens,
    variables: VariableSet,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Load the persisted configuration from `storage`, or start from the
    /// default if there is none or it cannot be used.
    ///
    /// Persisted parameters are merged over the defaults, so a record
    /// written with fewer parameters still yields a fully specified config.
    pub fn new(storage: S) -> Self {
        let config = load(&storage);
        let tokens = resolve(config.mode, config.variant, &config.parameters);
        let variables = project(&tokens);
        Self {
            storage,
            config,
            tokens,
            variables,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// An owned copy of the current configuration.
    #[must_use]
    pub fn get(&self) -> ThemeConfig {
        self.config.clone()
    }

    #[must_use]
    pub const fn tokens(&self) -> &StyleTokens {
        &self.tokens
    }

    #[must_use]
    pub const fn variables(&self) -> &VariableSet {
        &self.variables
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    // ── Mutators ────────────────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("set mode {} -> {mode}", self.config.mode);
        self.config.mode = mode;
        self.commit();
    }

    pub fn set_variant(&mut self, variant: Variant) {
        log::debug!("set variant {} -> {variant}", self.config.variant);
        self.config.variant = variant;
        self.commit();
    }

    /// Shallow-merge `patch` into the current parameters.
    pub fn update_parameters(&mut self, patch: &Parameters) {
        log::debug!("update parameters {patch:?}");
        self.config.parameters.merge(patch);
        self.commit();
    }

    /// Replace mode and variant, and merge `config.parameters` into the
    /// current parameters.
    pub fn set_config(&mut self, config: &ThemeConfig) {
        log::debug!("set config {}/{}", config.mode, config.variant);
        self.config.mode = config.mode;
        self.config.variant = config.variant;
        self.config.parameters.merge(&config.parameters);
        self.commit();
    }

    /// Return to the compiled default. Parameters are replaced, not merged.
    pub fn reset(&mut self) {
        log::info!("reset theme configuration");
        self.config = ThemeConfig::default();
        self.commit();
    }

    // ── Listeners ───────────────────────────────────────────────────────

    /// Register `listener` to be called after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeConfig, &VariableSet) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn commit(&mut self) {
        match self.config.to_json() {
            Ok(json) => {
                if let Err(e) = self.storage.set(STORAGE_KEY, &json) {
                    log::warn!("could not persist theme configuration: {e}");
                }
            }
            Err(e) => log::warn!("could not serialize theme configuration: {e}"),
        }

        self.tokens = resolve(self.config.mode, self.config.variant, &self.config.parameters);
        self.variables = project(&self.tokens);

        for (_, listener) in &mut self.listeners {
            listener(&self.config, &self.variables);
        }
    }
}

fn load(storage: &impl KeyValueStore) -> ThemeConfig {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("no stored theme configuration, using defaults");
            return ThemeConfig::default();
        }
        Err(e) => {
            log::warn!("could not read theme configuration: {e}");
            return ThemeConfig::default();
        }
    };

    match ThemeConfig::from_json(&raw) {
        Ok(stored) => {
            log::info!("loaded theme configuration {}/{}", stored.mode, stored.variant);
            ThemeConfig {
                parameters: Parameters::defaults().merged(&stored.parameters),
                ..stored
            }
        }
        Err(e) => {
            log::warn!("discarding corrupt theme configuration: {e}");
            ThemeConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
