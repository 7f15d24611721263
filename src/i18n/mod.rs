//! Translation lookup over nested locale dictionaries.
//!
//! # Architecture
//!
//! - `tree`: Recursive `Leaf` / `Node` representation of one locale's data
//! - `registry`: Construction-time validation of locale documents
//! - `context`: The `I18n` runtime instance (registry + current-locale cursor)
//! - `translate`: Path and scope composition, traversal, diagnostics
//! - `interpolate`: `{{name}}` substitution
//! - `switch`: Changing the current locale and the change hook
//!
//! # Example
//!
//! ```rust,ignore
//! use i18n_tree::i18n::{I18n, RegistryOptions, TranslateOptions};
//!
//! let i18n = I18n::new(
//!     RegistryOptions::new("en")
//!         .locale("en", r#"{"pages": {"home": {"welcome": "Welcome, {{name}}!"}}}"#)
//!         .locale("tr", r#"{"pages": {"home": {"welcome": "Hoş geldin, {{name}}!"}}}"#),
//! )?;
//!
//! let options = TranslateOptions::new().scope("pages.home").var("name", "Ada");
//! assert_eq!(i18n.translate("welcome", &options), "Welcome, Ada!");
//!
//! i18n.change_locale("tr")?;
//! assert_eq!(i18n.translate("welcome", &options), "Hoş geldin, Ada!");
//! ```

mod context;
mod error;
mod interpolate;
mod options;
mod registry;
mod switch;
mod translate;
mod tree;

pub use context::{I18n, LocaleChangeHook, Translator};
pub use error::{BuildError, LocaleError};
pub use interpolate::{interpolate, placeholders, unresolved_placeholders};
pub use options::{TranslateOptions, RESERVED_KEYS};
pub use registry::{LocaleEntry, LocaleSource, Registry, RegistryOptions, DEFAULT_SEPARATOR};
pub use translate::compose_path;
pub use tree::{render_value, TreeValue};
