//! Current-locale cursor: switching, querying, and the change hook.

use crate::i18n::context::I18n;
use crate::i18n::error::LocaleError;
use tracing::debug;

impl I18n {
    /// Move the cursor to `locale`.
    ///
    /// Switching to the current locale is a no-op and does not fire the hook.
    /// Otherwise the hook runs after the cursor is updated, still under the
    /// write lock. The hook must not call back into this instance.
    pub fn change_locale(&self, locale: &str) -> Result<(), LocaleError> {
        let mut state = self.write_state();

        let Some(index) = self.registry.position(locale) else {
            if self.is_debug() {
                debug!("[change_locale] locale '{}' is not available", locale);
            }
            return Err(LocaleError::Unavailable(locale.to_string()));
        };

        if state.current == index {
            return Ok(());
        }

        state.current = index;

        if let Some(hook) = state.on_change.as_ref() {
            hook(locale);
        }

        if self.is_debug() {
            debug!("[change_locale] locale changed to '{}'", locale);
        }

        Ok(())
    }

    /// Identifier of the locale under the cursor.
    pub fn current_locale(&self) -> String {
        let state = self.read_state();
        self.current_entry(&state).locale().to_string()
    }

    /// Register the change hook, replacing any previous one.
    pub fn on_locale_change<F>(&self, hook: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.write_state().on_change = Some(Box::new(hook));
    }

    /// Remove the change hook, if any.
    pub fn clear_locale_change(&self) {
        self.write_state().on_change = None;
    }
}
