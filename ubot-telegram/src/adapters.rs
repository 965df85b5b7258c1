//! Adapters from Telegram (teloxide) types to ubot_core types.

use teloxide::types::UserId;
use ubot_core::{Chat, ChatKind, Message, MessageDirection, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Messages from `owner`
/// (the controlling account) become [`MessageDirection::Outgoing`].
pub struct TelegramMessageWrapper<'a> {
    pub message: &'a teloxide::types::Message,
    pub owner: Option<UserId>,
}

impl<'a> TelegramMessageWrapper<'a> {
    pub fn new(message: &'a teloxide::types::Message, owner: Option<UserId>) -> Self {
        Self { message, owner }
    }

    fn direction(&self) -> MessageDirection {
        match (&self.message.from, self.owner) {
            (Some(from), Some(owner)) if from.id == owner => MessageDirection::Outgoing,
            _ => MessageDirection::Incoming,
        }
    }

    fn chat_kind(&self) -> ChatKind {
        let chat = &self.message.chat;
        if chat.is_channel() {
            ChatKind::Channel
        } else if chat.is_supergroup() {
            ChatKind::Supergroup
        } else if chat.is_group() {
            ChatKind::Group
        } else {
            ChatKind::Private
        }
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.message;
        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::anonymous),
            chat: Chat {
                id: msg.chat.id.0,
                kind: self.chat_kind(),
                title: msg.chat.title().map(str::to_string),
            },
            content: msg.text().unwrap_or("").to_string(),
            direction: self.direction(),
            created_at: msg.date,
            reply_to_message_id: msg.reply_to_message().map(|m| m.id.to_string()),
            reply_to_message_content: msg
                .reply_to_message()
                .and_then(|m| m.text())
                .map(str::to_string),
        }
    }
}
