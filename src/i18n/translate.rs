//! Key resolution: scope composition, tree traversal and interpolation.
//!
//! Resolution never fails hard. An empty path renders as
//! `invalid path '<path>'` and a missing key as
//! `missing translation for path '<locale>.<path>'`.

use crate::i18n::context::I18n;
use crate::i18n::interpolate::{interpolate, unresolved_placeholders};
use crate::i18n::options::TranslateOptions;
use crate::i18n::tree::TreeValue;
use std::fmt;
use tracing::debug;

/// Segments of `path` with a non-empty `scope` prepended.
///
/// The scope is a plain prefix: `compose_path(p, Some(s), sep)` equals
/// `compose_path(&format!("{s}{sep}{p}"), None, sep)`, so an empty path under
/// a scope still contributes one empty segment. Only an empty path without a
/// scope has no segments at all.
///
/// `compose_path("c", Some("a.b"), ".")` is `["a", "b", "c"]`.
pub fn compose_path<'a>(path: &'a str, scope: Option<&'a str>, separator: &str) -> Vec<&'a str> {
    match scope.filter(|scope| !scope.is_empty()) {
        Some(scope) => scope.split(separator).chain(path.split(separator)).collect(),
        None if path.is_empty() => Vec::new(),
        None => path.split(separator).collect(),
    }
}

/// Soft resolution failure, rendered as the diagnostic string.
enum Unresolved {
    InvalidPath { path: String },
    Missing { locale: String, path: String },
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::InvalidPath { path } => write!(f, "invalid path '{}'", path),
            Unresolved::Missing { locale, path } => {
                write!(f, "missing translation for path '{}.{}'", locale, path)
            }
        }
    }
}

impl I18n {
    /// Resolve `path` to a string.
    ///
    /// Without a `locale` option the current locale is used. An explicit
    /// locale that is not registered falls back to the current locale's tree,
    /// while diagnostics still name the requested locale.
    pub fn translate(&self, path: &str, options: &TranslateOptions) -> String {
        let resolved = self.resolve(path, options, |value| {
            let template = value.render();
            if self.is_debug() {
                for name in unresolved_placeholders(&template, options.vars()) {
                    debug!(
                        "[translate] placeholder '{{{{{}}}}}' left unresolved in '{}'",
                        name, path
                    );
                }
            }
            interpolate(&template, options.vars())
        });

        resolved.unwrap_or_else(|unresolved| unresolved.to_string())
    }

    /// Shorthand for [`I18n::translate`] without options.
    pub fn t(&self, path: &str) -> String {
        self.translate(path, &TranslateOptions::new())
    }

    /// Whether `path` resolves, using the same scope and locale rules as
    /// [`I18n::translate`].
    pub fn has_key(&self, path: &str, options: &TranslateOptions) -> bool {
        self.resolve(path, options, |_| ()).is_ok()
    }

    /// Walk the selected tree under the read lock and hand the resolved value
    /// to `render` before the lock is released.
    fn resolve<T>(
        &self,
        path: &str,
        options: &TranslateOptions,
        render: impl FnOnce(&TreeValue) -> T,
    ) -> Result<T, Unresolved> {
        let separator = self.separator();
        let keys = compose_path(path, options.scope_str(), separator);
        let full_path = keys.join(separator);

        let state = self.read_state();
        let current = self.current_entry(&state);
        let requested = options.locale_str().unwrap_or(current.locale());

        if keys.is_empty() {
            if self.is_debug() {
                debug!("[translate] invalid path '{}.{}'", requested, full_path);
            }
            return Err(Unresolved::InvalidPath { path: full_path });
        }

        let root = match options.locale_str() {
            Some(locale) => match self.registry.get(locale) {
                Some(entry) => entry.data(),
                None => {
                    if self.is_debug() {
                        debug!(
                            "[translate] locale '{}' is not defined, using '{}'",
                            locale,
                            current.locale()
                        );
                    }
                    current.data()
                }
            },
            None => current.data(),
        };

        let mut node = root;
        for key in &keys {
            match node.get(key) {
                Some(child) => node = child,
                None => {
                    if self.is_debug() {
                        debug!(
                            "[translate] missing translation for path '{}.{}'",
                            requested, full_path
                        );
                    }
                    return Err(Unresolved::Missing {
                        locale: requested.to_string(),
                        path: full_path,
                    });
                }
            }
        }

        Ok(render(node))
    }
}
