//! # ubot-telegram
//!
//! Telegram transport layer: adapters from teloxide types, the [`ubot_core::Transport`]
//! implementation, minimal config, and the REPL runner feeding the dispatch loop.
//! Handles only Telegram connectivity; command semantics live in ubot-dispatch and the modules.

mod adapters;
mod config;
mod runner;
mod transport;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use config::TelegramConfig;
pub use runner::run_repl;
pub use transport::{parse_message_id, TelegramTransport};
