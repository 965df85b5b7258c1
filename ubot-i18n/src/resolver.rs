//! Module-scoped text resolution against the shared locale selection.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::I18nError;
use crate::locale::LocaleState;
use crate::text::LocalizedText;

/// Resolves a module's text keys using the locale selected at call time.
///
/// Cheap to clone; every clone observes the same [`LocaleState`], so a locale change made by
/// one module is seen by all others on their next lookup.
#[derive(Debug, Clone)]
pub struct TextResolver {
    locale: Arc<LocaleState>,
    catalog: Arc<Catalog>,
}

impl TextResolver {
    /// Binds `catalog` to the shared locale. Fails if any key lacks the default-locale variant.
    pub fn new(locale: Arc<LocaleState>, catalog: Catalog) -> Result<Self, I18nError> {
        catalog.validate(locale.default_locale())?;
        Ok(Self {
            locale,
            catalog: Arc::new(catalog),
        })
    }

    /// Text for `key` in the current locale, or the default-locale text when the current
    /// locale has no variant.
    pub fn resolve(&self, key: &str) -> Result<String, I18nError> {
        let current = self.locale.current();
        if let Some(text) = self.catalog.get(key, &current) {
            return Ok(text.to_string());
        }
        let default_locale = self.locale.default_locale();
        match self.catalog.get(key, default_locale) {
            Some(text) => {
                debug!(
                    module = %self.catalog.module(),
                    key = %key,
                    locale = %current,
                    "Text falls back to default locale"
                );
                Ok(text.to_string())
            }
            None => Err(I18nError::UnknownKey {
                module: self.catalog.module().to_string(),
                key: key.to_string(),
            }),
        }
    }

    /// A handle on `key` that renders in the locale selected when it is read.
    pub fn text(&self, key: &str) -> Result<LocalizedText, I18nError> {
        if !self.catalog.contains_key(key) {
            return Err(I18nError::UnknownKey {
                module: self.catalog.module().to_string(),
                key: key.to_string(),
            });
        }
        Ok(LocalizedText::Key {
            texts: self.clone(),
            key: key.to_string(),
        })
    }

    /// [`resolve`](Self::resolve) followed by positional `{}` substitution.
    ///
    /// Arguments are `Sync` so that a call inside an async handler keeps its future `Send`.
    pub fn format(&self, key: &str, args: &[FormatArg<'_>]) -> Result<String, I18nError> {
        Ok(fill(&self.resolve(key)?, args))
    }

    pub fn current_locale_code(&self) -> String {
        self.locale.current()
    }

    pub fn locale(&self) -> &Arc<LocaleState> {
        &self.locale
    }

    pub fn module(&self) -> &str {
        self.catalog.module()
    }
}

/// One positional argument of [`fill`] and [`TextResolver::format`].
pub type FormatArg<'a> = &'a (dyn fmt::Display + Sync);

/// Replaces each `{}` in `template` with the next element of `args`, left to right.
/// Surplus placeholders stay as written; surplus args are ignored.
pub fn fill(template: &str, args: &[FormatArg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
