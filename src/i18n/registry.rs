//! Locale registry: the validated set of translation trees.
//!
//! A [`Registry`] is built once from raw locale documents and is immutable
//! afterwards. Construction enforces the two registry invariants (unique locale
//! identifiers, default locale present) and never rechecks them.

use crate::i18n::error::BuildError;
use crate::i18n::tree::TreeValue;
use serde_json::Value;
use tracing::debug;

/// Separator used when none (or an empty one) is configured.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Raw input for one locale: its identifier and the JSON document bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSource {
    pub locale: String,
    pub document: Vec<u8>,
}

impl LocaleSource {
    /// Pair a locale identifier with its raw JSON document.
    pub fn new(locale: impl Into<String>, document: impl Into<Vec<u8>>) -> Self {
        Self {
            locale: locale.into(),
            document: document.into(),
        }
    }
}

/// Construction input for a [`Registry`].
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Locale selected after construction. Must match one of `locales`.
    pub default_locale: String,

    /// Locale documents in registration order.
    pub locales: Vec<LocaleSource>,

    /// Path separator. `None` or `Some("")` means [`DEFAULT_SEPARATOR`].
    pub separator: Option<String>,

    /// Emit `tracing` debug lines for validation and resolution steps.
    pub debug: bool,
}

impl RegistryOptions {
    /// Start an empty set of options with the given default locale.
    ///
    /// Separator and debug take their defaults until set.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            ..Self::default()
        }
    }

    /// Append a locale document. Registration order is preserved.
    pub fn locale(mut self, locale: impl Into<String>, document: impl Into<Vec<u8>>) -> Self {
        self.locales.push(LocaleSource::new(locale, document));
        self
    }

    /// Use `separator` to split paths and scopes. An empty value keeps `"."`.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Enable or disable debug tracing.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// A locale identifier paired with its translation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleEntry {
    locale: String,
    data: TreeValue,
}

impl LocaleEntry {
    /// The locale identifier, exactly as registered.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Root of the tree. Always a [`TreeValue::Node`].
    pub fn data(&self) -> &TreeValue {
        &self.data
    }
}

/// Validated, immutable set of locale entries.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<LocaleEntry>,
    default_locale: String,
    default_index: usize,
    separator: String,
    debug: bool,
}

impl Registry {
    /// Parse and validate every locale document.
    ///
    /// Sources are processed in order; the first failure aborts construction.
    /// For each source the document is parsed before the duplicate check, so a
    /// malformed duplicate reports the parse error.
    pub fn new(options: RegistryOptions) -> Result<Self, BuildError> {
        let RegistryOptions {
            default_locale,
            locales,
            separator,
            debug,
        } = options;

        let mut entries: Vec<LocaleEntry> = Vec::with_capacity(locales.len());

        for source in locales {
            let data = parse_document(&source, debug)?;

            if entries.iter().any(|entry| entry.locale == source.locale) {
                if debug {
                    debug!("[new] locale '{}' is defined more than once", source.locale);
                }
                return Err(BuildError::DuplicateLocale(source.locale));
            }

            entries.push(LocaleEntry {
                locale: source.locale,
                data,
            });
        }

        let Some(default_index) = entries
            .iter()
            .position(|entry| entry.locale == default_locale)
        else {
            if debug {
                debug!("[new] default locale '{}' is not defined", default_locale);
            }
            return Err(BuildError::MissingDefault(default_locale));
        };

        let separator = match separator {
            Some(separator) if !separator.is_empty() => separator,
            _ => DEFAULT_SEPARATOR.to_string(),
        };

        let registry = Self {
            entries,
            default_locale,
            default_index,
            separator,
            debug,
        };

        if debug {
            debug!("[new] default locale is '{}'", registry.default_locale);
            debug!(
                "[new] available locales are {:?}",
                registry.locales().collect::<Vec<_>>()
            );
        }

        Ok(registry)
    }

    /// Find an entry by identifier (first match).
    ///
    /// # Arguments
    /// * `locale` - The locale identifier, compared exactly
    ///
    /// # Returns
    /// * `Some(&LocaleEntry)` if the locale is registered
    /// * `None` otherwise
    pub fn get(&self, locale: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.locale == locale)
    }

    pub(crate) fn position(&self, locale: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.locale == locale)
    }

    pub(crate) fn entry(&self, index: usize) -> &LocaleEntry {
        &self.entries[index]
    }

    /// Check if a locale identifier is registered.
    pub fn contains(&self, locale: &str) -> bool {
        self.get(locale).is_some()
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    /// Registered locale identifiers in registration order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.locale.as_str())
    }

    /// The locale selected right after construction.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub(crate) fn default_index(&self) -> usize {
        self.default_index
    }

    /// The separator in effect; never empty.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Check if debug tracing is enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

/// Parse one document into a tree, requiring an object at the root.
fn parse_document(source: &LocaleSource, debug: bool) -> Result<TreeValue, BuildError> {
    let value: Value = serde_json::from_slice(&source.document).map_err(|err| {
        if debug {
            debug!(
                "[new] error unmarshalling JSON for locale '{}': {}",
                source.locale, err
            );
        }
        BuildError::Parse {
            locale: source.locale.clone(),
            source: err,
        }
    })?;

    if !value.is_object() {
        if debug {
            debug!("[new] locale '{}' is not a JSON object", source.locale);
        }
        return Err(BuildError::RootNotObject {
            locale: source.locale.clone(),
        });
    }

    Ok(TreeValue::from(value))
}
