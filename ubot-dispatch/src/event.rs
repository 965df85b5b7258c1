//! The value handed to a command callback.

use std::sync::Arc;

use ubot_core::{Chat, Message, Result, Transport};

/// One matched invocation: the triggering message, the captured arguments and a transport
/// handle keyed to that message. Lives for a single dispatch.
#[derive(Clone)]
pub struct CommandEvent {
    command: String,
    args: String,
    message: Arc<Message>,
    transport: Arc<dyn Transport>,
}

impl CommandEvent {
    pub fn new(
        command: impl Into<String>,
        args: impl Into<String>,
        message: Arc<Message>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            command: command.into(),
            args: args.into(),
            message,
            transport,
        }
    }

    /// Name of the command that matched.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Remainder after the command name; empty when none was given.
    pub fn args(&self) -> &str {
        &self.args
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn chat(&self) -> &Chat {
        &self.message.chat
    }

    pub fn is_outgoing(&self) -> bool {
        self.message.is_outgoing()
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Replaces the text of the triggering message.
    pub async fn edit(&self, text: &str) -> Result<()> {
        self.transport
            .edit_message(&self.message.chat, &self.message.id, text)
            .await
    }

    /// Replies to the triggering message.
    pub async fn reply(&self, text: &str) -> Result<()> {
        self.transport.reply_to(&self.message, text).await
    }
}
