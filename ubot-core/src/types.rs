//! Core types: user, chat, message and the conversions from transport-specific types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for messages without a sender (e.g. channel posts).
    pub fn anonymous() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Kind of chat a message was posted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Chat (private, group or channel) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
    pub title: Option<String>,
}

impl Chat {
    /// True for groups, supergroups and channels; false for one-to-one chats.
    pub fn is_group_like(&self) -> bool {
        !matches!(self.kind, ChatKind::Private)
    }
}

/// A single message with sender, chat, text content and optional reply context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport-specific id (Telegram numeric id as string).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
    pub reply_to_message_id: Option<String>,
    /// Text of the replied-to message, when there is one.
    pub reply_to_message_content: Option<String>,
}

impl Message {
    pub fn is_outgoing(&self) -> bool {
        matches!(self.direction, MessageDirection::Outgoing)
    }
}

/// Direction of the message relative to the controlling account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    /// Sent by someone else.
    Incoming,
    /// Sent by the controlling account.
    Outgoing,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
