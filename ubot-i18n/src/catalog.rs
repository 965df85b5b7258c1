//! Per-module text catalog: logical key → locale → template.

use std::collections::{BTreeMap, HashMap};

use crate::error::I18nError;

/// Text templates owned by one module, one variant per locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    module: String,
    entries: BTreeMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Creates an empty catalog for `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the `locale` variant of `key`.
    pub fn with_text(
        mut self,
        key: impl Into<String>,
        locale: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(locale.into(), template.into());
        self
    }

    /// Parses a language pack of the form `{"key": {"en": "...", "de": "..."}}`.
    pub fn from_json(module: impl Into<String>, json: &str) -> Result<Self, I18nError> {
        let module = module.into();
        let entries: BTreeMap<String, HashMap<String, String>> = serde_json::from_str(json)
            .map_err(|e| I18nError::InvalidPack {
                module: module.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { module, entries })
    }

    /// Checks every key has a `default_locale` variant. A missing one is a packaging bug and
    /// must stop the module from loading.
    pub fn validate(&self, default_locale: &str) -> Result<(), I18nError> {
        for (key, variants) in &self.entries {
            if !variants.contains_key(default_locale) {
                return Err(I18nError::MissingDefault {
                    module: self.module.clone(),
                    key: key.clone(),
                    locale: default_locale.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Variant for `locale`, if the key has one.
    pub fn get(&self, key: &str, locale: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|variants| variants.get(locale))
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn module(&self) -> &str {
        &self.module
    }
}
