//! Wraps teloxide::Bot and implements [`ubot_core::Transport`]. Production code talks to
//! Telegram; tests substitute another Transport impl.

use async_trait::async_trait;
use teloxide::types::{ChatId, MessageId, ReplyParameters, UserId};
use teloxide::{prelude::*, ApiError, RequestError};
use tracing::{debug, warn};
use ubot_core::{Chat, Message, Result, Transport, UbotError};

/// Parses a message id string into a Telegram [`MessageId`].
pub fn parse_message_id(s: &str) -> Result<MessageId> {
    s.parse()
        .map(MessageId)
        .map_err(|_| UbotError::Transport(format!("Invalid message_id for edit: {}", s)))
}

fn map_request_error(e: RequestError) -> UbotError {
    match &e {
        RequestError::Api(ApiError::ChatNotFound) => UbotError::ChatNotFound(e.to_string()),
        _ => UbotError::Transport(e.to_string()),
    }
}

/// What a failed `editMessageText` means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditFailure {
    /// Same text as before; nothing to do.
    Unchanged,
    /// Telegram will not edit this message (not ours, or gone); reply instead.
    Refused,
    /// Anything else, including network errors; reported to the caller.
    Failed,
}

fn classify_edit_error(e: &RequestError) -> EditFailure {
    match e {
        RequestError::Api(ApiError::MessageNotModified) => EditFailure::Unchanged,
        RequestError::Api(ApiError::MessageCantBeEdited | ApiError::MessageToEditNotFound) => {
            EditFailure::Refused
        }
        _ => EditFailure::Failed,
    }
}

/// Thin wrapper around teloxide::Bot acting as the controlling account `me`.
pub struct TelegramTransport {
    bot: teloxide::Bot,
    me: UserId,
}

impl TelegramTransport {
    pub fn new(bot: teloxide::Bot, me: UserId) -> Self {
        Self { bot, me }
    }

    /// Asks Telegram who the bot account is and builds the transport for it.
    pub async fn connect(bot: teloxide::Bot) -> anyhow::Result<Self> {
        let me = bot.get_me().await?;
        debug!(user_id = me.user.id.0, "Transport connected");
        Ok(Self::new(bot, me.user.id))
    }

    async fn reply(&self, chat_id: i64, message_id: MessageId, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .reply_parameters(ReplyParameters::new(message_id))
            .await
            .map_err(map_request_error)?;
        Ok(())
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.reply(message.chat.id, id, text).await
    }

    /// The Bot API can only edit the bot's own messages; when Telegram refuses the edit the
    /// text is sent as a reply to the original message instead. Other failures are returned.
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let Err(e) = self
            .bot
            .edit_message_text(ChatId(chat.id), id, text.to_string())
            .await
        else {
            return Ok(());
        };
        match classify_edit_error(&e) {
            EditFailure::Unchanged => Ok(()),
            EditFailure::Refused => {
                warn!(
                    chat_id = chat.id,
                    message_id = %message_id,
                    error = %e,
                    "Edit refused, replying instead"
                );
                self.reply(chat.id, id, text).await
            }
            EditFailure::Failed => Err(map_request_error(e)),
        }
    }

    async fn is_chat_admin(&self, chat: &Chat) -> Result<bool> {
        if !chat.is_group_like() {
            return Ok(false);
        }
        let member = self
            .bot
            .get_chat_member(ChatId(chat.id), self.me)
            .await
            .map_err(map_request_error)?;
        Ok(member.is_privileged())
    }

    async fn export_invite_link(&self, chat: &Chat) -> Result<String> {
        if !self.is_chat_admin(chat).await? {
            return Err(UbotError::AdminRequired(chat.id));
        }
        self.bot
            .export_chat_invite_link(ChatId(chat.id))
            .await
            .map_err(map_request_error)
    }
}
