//! Settings that do not depend on the Telegram connection.

use anyhow::{Context, Result};
use std::env;
use ubot_dispatch::{RegistrationPolicy, DEFAULT_TRIGGER_PREFIX};
use ubot_i18n::{DEFAULT_LOCALE, SUPPORTED_LOCALES};

const DEFAULT_LOG_FILE: &str = "logs/ubot.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// UBOT_LANG
    pub lang: String,
    /// UBOT_TRIGGER
    pub trigger: String,
    /// NOT_LOAD_MODULES
    pub disabled_modules: Vec<String>,
    /// UBOT_STRICT_REGISTRATION
    pub strict_registration: bool,
    /// LOG_FILE
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let lang = env::var("UBOT_LANG")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|_| DEFAULT_LOCALE.to_string());
        let trigger =
            env::var("UBOT_TRIGGER").unwrap_or_else(|_| DEFAULT_TRIGGER_PREFIX.to_string());
        let disabled_modules = match env::var("NOT_LOAD_MODULES") {
            Ok(raw) => parse_module_list(&raw)?,
            Err(_) => Vec::new(),
        };
        let strict_registration = env::var("UBOT_STRICT_REGISTRATION")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            lang,
            trigger,
            disabled_modules,
            strict_registration,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.trigger.is_empty() || self.trigger.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "UBOT_TRIGGER must be non-empty and contain no whitespace: {:?}",
                self.trigger
            );
        }
        if !SUPPORTED_LOCALES.contains(&self.lang.as_str()) {
            anyhow::bail!(
                "UBOT_LANG '{}' is not supported (supported: {})",
                self.lang,
                SUPPORTED_LOCALES.join(", ")
            );
        }
        Ok(())
    }

    pub fn policy(&self) -> RegistrationPolicy {
        if self.strict_registration {
            RegistrationPolicy::Strict
        } else {
            RegistrationPolicy::Overwrite
        }
    }
}

/// Accepts a JSON array (`["help", "chatinfo"]`) or a comma separated list.
pub(crate) fn parse_module_list(raw: &str) -> Result<Vec<String>> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        let ids: Vec<String> = serde_json::from_str(raw)
            .with_context(|| format!("NOT_LOAD_MODULES is not a JSON list of strings: {}", raw))?;
        return Ok(ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect());
    }
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect())
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
