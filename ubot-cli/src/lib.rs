//! # ubot-cli
//!
//! Argument parsing, env config and bootstrap of the built-in modules.

pub mod cli;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::{AppConfig, BotConfig};

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use ubot_dispatch::{EventHandler, LoadReport, ModuleLoader, Registries};
use ubot_i18n::LocaleState;
use ubot_modules::builtin_manifest;

/// Everything the loader produced for one configuration.
pub struct BotContext {
    pub handler: EventHandler,
    pub registries: Arc<Registries>,
    pub locale: Arc<LocaleState>,
    pub report: LoadReport,
}

/// Builds locale state and registries from `app` and loads the built-in manifest.
pub fn load_modules(app: &AppConfig) -> Result<BotContext> {
    let locale = Arc::new(LocaleState::with_builtin_locales(&app.lang)?);
    let registries = Arc::new(Registries::new(app.policy()));
    let mut handler = EventHandler::new(app.trigger.clone());

    let report = ModuleLoader::new(registries.clone(), locale.clone())
        .disable(app.disabled_modules.iter().cloned())
        .load(builtin_manifest(), &mut handler);

    for (id, reason) in &report.failed {
        warn!(module = %id, reason = %reason, "Module not loaded");
    }
    info!(
        loaded = report.loaded.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        commands = handler.len(),
        "Modules loaded"
    );

    Ok(BotContext {
        handler,
        registries,
        locale,
        report,
    })
}
