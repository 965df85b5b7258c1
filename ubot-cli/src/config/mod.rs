//! Bot configuration: [`TelegramConfig`] (connection) plus [`AppConfig`] (locale, trigger,
//! module selection, logging). Loaded from env.

mod app;


pub use app::AppConfig;

use anyhow::Result;
use ubot_telegram::TelegramConfig;

/// Full config for `ubot run`. Use [`BotConfig::load`], then [`BotConfig::validate`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub app: AppConfig,
}

impl BotConfig {
    /// Loads from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let app = AppConfig::from_env()?;
        Ok(Self { telegram, app })
    }

    /// Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.app.validate()
    }

    pub fn log_file(&self) -> &str {
        &self.app.log_file
    }
}
