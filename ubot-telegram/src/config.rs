//! Minimal Telegram config: token, API URL, owner account. Loaded from BOT_TOKEN,
//! TELEGRAM_API_URL (or TELOXIDE_API_URL) and OWNER_ID.

use anyhow::{Context, Result};
use std::env;
use teloxide::types::UserId;

/// Telegram connection settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    /// Account whose messages count as outgoing.
    pub owner_id: Option<u64>,
}

impl TelegramConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN; BOT_TOKEN is required
    /// otherwise. TELEGRAM_API_URL and OWNER_ID are optional.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let owner_id = match env::var("OWNER_ID") {
            Ok(raw) => Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("OWNER_ID is not a numeric user id: {}", raw))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            bot_token,
            telegram_api_url,
            owner_id,
        })
    }

    /// Uses the given token; everything else unset.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            owner_id: None,
        }
    }

    pub fn owner(&self) -> Option<UserId> {
        self.owner_id.map(UserId)
    }

    /// Checks the API URL parses, if set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide Bot, pointing it at the custom API URL when one is set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
