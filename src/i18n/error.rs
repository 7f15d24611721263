//! Error types for registry construction and locale switching.
//!
//! Resolution failures are not errors: `translate` degrades to a diagnostic
//! string instead (see [`crate::i18n::I18n::translate`]).

use thiserror::Error;

/// Hard failure while building a [`crate::i18n::Registry`].
///
/// Any of these aborts construction; no partial registry is returned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The document for a locale is not well-formed JSON.
    #[error("error unmarshalling JSON for locale '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its root is not an object.
    #[error("locale '{locale}' must be a JSON object at the root")]
    RootNotObject { locale: String },

    /// Two sources share the same locale identifier.
    #[error("locale '{0}' is defined more than once")]
    DuplicateLocale(String),

    /// No source matches the declared default locale.
    #[error("default locale '{0}' is not defined")]
    MissingDefault(String),
}

/// Failure of [`crate::i18n::I18n::change_locale`]. The cursor is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale '{0}' is not available")]
    Unavailable(String),
}

impl LocaleError {
    /// The locale identifier that was requested.
    pub fn locale(&self) -> &str {
        match self {
            LocaleError::Unavailable(locale) => locale,
        }
    }
}
