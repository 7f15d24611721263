//! Per-call options for [`crate::i18n::I18n::translate`].

use serde_json::{Map, Value};

/// Option keys that are never treated as substitutions.
pub const RESERVED_KEYS: [&str; 2] = ["scope", "locale"];

/// Scope prefix, locale override and named substitutions for one lookup.
///
/// ```rust,ignore
/// let options = TranslateOptions::new()
///     .scope("pages.home")
///     .locale("tr")
///     .var("name", "Ada");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslateOptions {
    scope: Option<String>,
    locale: Option<String>,
    vars: Vec<(String, Value)>,
}

impl TranslateOptions {
    /// Empty options: no scope, current locale, no substitutions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a dynamic options bag.
    ///
    /// String-valued `scope` and `locale` keys set those options; a reserved key
    /// with any other value type is dropped. All remaining keys become
    /// substitutions.
    pub fn from_map(map: Map<String, Value>) -> Self {
        let mut options = Self::new();
        for (key, value) in map {
            if key == "scope" {
                if let Value::String(scope) = value {
                    options.scope = Some(scope);
                }
            } else if key == "locale" {
                if let Value::String(locale) = value {
                    options.locale = Some(locale);
                }
            } else {
                options.vars.push((key, value));
            }
        }
        options
    }

    /// Prefix composed before the path, using the registry separator.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Resolve against this locale instead of the current one, for this call only.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Replace every `{{name}}` in the result with `value`.
    ///
    /// Setting the same name twice keeps the last value. Reserved names are
    /// ignored.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if RESERVED_KEYS.contains(&name.as_str()) {
            return self;
        }
        let value = value.into();
        match self.vars.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.vars.push((name, value)),
        }
        self
    }

    /// The scope prefix, if set.
    pub fn scope_str(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The locale override, if set.
    pub fn locale_str(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Substitutions in the order they were added.
    pub fn vars(&self) -> &[(String, Value)] {
        &self.vars
    }
}
