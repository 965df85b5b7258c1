//! Process-wide locale selection.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock};

use tracing::info;

use crate::error::I18nError;

/// Locale every catalog must provide a variant for.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales the built-in language packs ship.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "de", "es", "fr"];

/// Currently selected locale plus the set it may be switched to.
///
/// Reads happen on every resolved text; writes only through [`LocaleState::set_locale`].
#[derive(Debug)]
pub struct LocaleState {
    current: RwLock<String>,
    supported: BTreeSet<String>,
    default_locale: String,
}

impl LocaleState {
    /// Creates the state. Both `initial` and `default_locale` must be members of `supported`.
    pub fn new<I, S>(initial: &str, supported: I, default_locale: &str) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let supported: BTreeSet<String> = supported.into_iter().map(Into::into).collect();
        if !supported.contains(default_locale) {
            return Err(I18nError::UnsupportedLocale(default_locale.to_string()));
        }
        if !supported.contains(initial) {
            return Err(I18nError::UnsupportedLocale(initial.to_string()));
        }
        Ok(Self {
            current: RwLock::new(initial.to_string()),
            supported,
            default_locale: default_locale.to_string(),
        })
    }

    /// State over [`SUPPORTED_LOCALES`] with [`DEFAULT_LOCALE`] as fallback.
    pub fn with_builtin_locales(initial: &str) -> Result<Self, I18nError> {
        Self::new(initial, SUPPORTED_LOCALES.iter().copied(), DEFAULT_LOCALE)
    }

    /// Code of the locale selected right now.
    pub fn current(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switches the locale. Unsupported codes are rejected and leave the state untouched.
    pub fn set_locale(&self, code: &str) -> Result<(), I18nError> {
        if !self.is_supported(code) {
            return Err(I18nError::UnsupportedLocale(code.to_string()));
        }
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *current, code.to_string());
        info!(from = %previous, to = %code, "Locale changed");
        Ok(())
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.contains(code)
    }

    /// Supported codes in sorted order.
    pub fn supported(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }
}
