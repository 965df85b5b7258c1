//! Transport abstraction for replying to and editing the triggering message.
//!
//! [`Transport`] is transport-agnostic; ubot-telegram implements it via teloxide and tests
//! substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Operations a command callback may perform on the chat that triggered it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Replaces the text of an already-sent message. `message_id` is transport-specific.
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Whether the acting account currently holds administrative rights in `chat`.
    async fn is_chat_admin(&self, chat: &Chat) -> Result<bool>;
    /// Exports the primary invite link of `chat`. Fails with [`crate::UbotError::AdminRequired`]
    /// when the acting account lacks the right to do so.
    async fn export_invite_link(&self, chat: &Chat) -> Result<String>;
}
