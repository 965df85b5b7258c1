//! # ubot-core
//!
//! Core types and traits for the userbot: [`Transport`], message, chat and user types, error
//! types, and tracing initialization. Transport-agnostic; used by ubot-dispatch, ubot-telegram
//! and the built-in modules.

pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

pub use error::{Result, UbotError};
pub use logger::init_tracing;
pub use transport::Transport;
pub use types::{Chat, ChatKind, Message, MessageDirection, ToCoreMessage, ToCoreUser, User};
