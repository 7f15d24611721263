//! Runtime instance: an immutable [`Registry`] plus the current-locale cursor.

use crate::i18n::error::{BuildError, LocaleError};
use crate::i18n::options::TranslateOptions;
use crate::i18n::registry::{LocaleEntry, Registry, RegistryOptions};
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Callback invoked with the new locale after a successful switch.
pub type LocaleChangeHook = Box<dyn Fn(&str) + Send + Sync>;

/// Mutable state guarded by the lock: the cursor and the hook slot.
pub(crate) struct CursorState {
    /// Index into the registry entries.
    pub(crate) current: usize,
    pub(crate) on_change: Option<LocaleChangeHook>,
}

/// Translation lookup over a set of locale trees.
///
/// `I18n` is `Send + Sync`: share it behind an `Arc` or a `&` across threads.
/// Lookups take the cursor's read lock; [`I18n::change_locale`] takes the write
/// lock for the mutation and the hook call.
pub struct I18n {
    pub(crate) registry: Registry,
    pub(crate) state: RwLock<CursorState>,
}

impl I18n {
    /// Build a registry from raw documents and select the default locale.
    pub fn new(options: RegistryOptions) -> Result<Self, BuildError> {
        Registry::new(options).map(Self::from_registry)
    }

    /// Wrap an already validated registry, with the cursor on its default locale.
    pub fn from_registry(registry: Registry) -> Self {
        let current = registry.default_index();
        Self {
            registry,
            state: RwLock::new(CursorState {
                current,
                on_change: None,
            }),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registered locale identifiers in registration order.
    pub fn available_locales(&self) -> Vec<&str> {
        self.registry.locales().collect()
    }

    /// The locale selected at construction.
    pub fn default_locale(&self) -> &str {
        self.registry.default_locale()
    }

    /// The separator used for paths and scopes.
    pub fn separator(&self) -> &str {
        self.registry.separator()
    }

    /// Check if debug tracing is enabled.
    pub fn is_debug(&self) -> bool {
        self.registry.is_debug()
    }

    /// The entry under the cursor.
    pub(crate) fn current_entry(&self, state: &CursorState) -> &LocaleEntry {
        self.registry.entry(state.current)
    }

    // The cursor is a plain index that is valid in every state, so a panic in
    // a hook leaves nothing inconsistent behind.
    pub(crate) fn read_state(&self) -> RwLockReadGuard<'_, CursorState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_state(&self) -> RwLockWriteGuard<'_, CursorState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("I18n")
            .field("current_locale", &self.current_entry(&state).locale())
            .field("locales", &self.available_locales())
            .field("separator", &self.separator())
            .field("debug", &self.is_debug())
            .field("has_locale_change_hook", &state.on_change.is_some())
            .finish()
    }
}

/// Object-safe lookup surface, for callers that only need to translate and
/// switch locales.
pub trait Translator: Send + Sync {
    /// Resolve `path` with the given options.
    fn t(&self, path: &str, options: &TranslateOptions) -> String;

    /// Move the current locale; see [`I18n::change_locale`].
    fn change_locale(&self, locale: &str) -> Result<(), LocaleError>;

    /// Identifier of the current locale.
    fn current_locale(&self) -> String;
}

impl Translator for I18n {
    fn t(&self, path: &str, options: &TranslateOptions) -> String {
        self.translate(path, options)
    }

    fn change_locale(&self, locale: &str) -> Result<(), LocaleError> {
        I18n::change_locale(self, locale)
    }

    fn current_locale(&self) -> String {
        I18n::current_locale(self)
    }
}
