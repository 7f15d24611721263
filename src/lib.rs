//! Dot-path translation lookup over nested JSON locale dictionaries.
//!
//! See [`i18n`] for the lookup API and [`config`] for loading locale
//! documents from disk.

pub mod config;
pub mod i18n;

pub use i18n::{BuildError, I18n, LocaleError, RegistryOptions, TranslateOptions, Translator};
