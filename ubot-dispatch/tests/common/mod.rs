//! Shared fixtures: a recording [`Transport`] and message builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use ubot_core::{Chat, ChatKind, Message, MessageDirection, Result, Transport, UbotError, User};

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Edit { chat_id: i64, message_id: String, text: String },
    Reply { message_id: String, text: String },
}

/// Transport that records every outgoing call and answers admin lookups from a flag.
#[derive(Default)]
pub struct MockTransport {
    pub sent: Mutex<Vec<Sent>>,
    pub admin: bool,
    pub admin_lookup_fails: bool,
    pub admin_lookups: Mutex<usize>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn admin() -> Arc<Self> {
        Arc::new(Self {
            admin: true,
            ..Self::default()
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn edits(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Edit { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Reply {
            message_id: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn is_chat_admin(&self, _chat: &Chat) -> Result<bool> {
        *self.admin_lookups.lock().unwrap() += 1;
        if self.admin_lookup_fails {
            return Err(UbotError::Transport("lookup failed".to_string()));
        }
        Ok(self.admin)
    }

    async fn export_invite_link(&self, chat: &Chat) -> Result<String> {
        if self.admin {
            Ok(format!("https://t.me/+invite{}", chat.id.abs()))
        } else {
            Err(UbotError::AdminRequired(chat.id))
        }
    }
}

pub fn message(content: &str, direction: MessageDirection) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 123,
            username: Some("owner".to_string()),
            first_name: Some("Owner".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: -100456,
            kind: ChatKind::Supergroup,
            title: Some("Test group".to_string()),
        },
        content: content.to_string(),
        direction,
        created_at: Utc::now(),
        reply_to_message_id: None,
        reply_to_message_content: None,
    }
}

pub fn outgoing(content: &str) -> Message {
    message(content, MessageDirection::Outgoing)
}

pub fn incoming(content: &str) -> Message {
    message(content, MessageDirection::Incoming)
}

pub fn transport(mock: &Arc<MockTransport>) -> Arc<dyn Transport> {
    mock.clone()
}
