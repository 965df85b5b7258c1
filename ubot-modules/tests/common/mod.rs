//! Recording transport and a fully loaded bot for module tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use ubot_core::{Chat, ChatKind, Message, MessageDirection, Result, Transport, UbotError, User};
use ubot_dispatch::{EventHandler, LoadReport, ModuleLoader, RegistrationPolicy, Registries};
use ubot_i18n::LocaleState;
use ubot_modules::builtin_manifest;

/// Transport keeping the text of every edit, with configurable admin rights.
#[derive(Default)]
pub struct MockTransport {
    pub edits: Mutex<Vec<String>>,
    pub admin: bool,
    /// The export fails for a reason other than missing rights.
    pub export_fails: bool,
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

    pub fn edits(&self) -> Vec<String> {
        self.edits.lock().unwrap().clone()
    }

    pub fn last_edit(&self) -> Option<String> {
        self.edits().pop()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn reply_to(&self, _message: &Message, _text: &str) -> Result<()> {
        Ok(())
    }

    async fn edit_message(&self, _chat: &Chat, _message_id: &str, text: &str) -> Result<()> {
        self.edits.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn is_chat_admin(&self, _chat: &Chat) -> Result<bool> {
        Ok(self.admin)
    }

    async fn export_invite_link(&self, chat: &Chat) -> Result<String> {
        if !self.admin {
            Err(UbotError::AdminRequired(chat.id))
        } else if self.export_fails {
            Err(UbotError::Transport("Bad Request: chat not found".to_string()))
        } else {
            Ok(format!("https://t.me/+link{}", chat.id.abs()))
        }
    }
}

/// Built-in modules loaded into a fresh handler.
pub struct TestBot {
    pub handler: EventHandler,
    pub registries: Arc<Registries>,
    pub locale: Arc<LocaleState>,
    pub report: LoadReport,
}

impl TestBot {
    pub fn load() -> Self {
        Self::load_without(&[])
    }

    pub fn load_without(disabled: &[&str]) -> Self {
        let locale = Arc::new(LocaleState::with_builtin_locales("en").unwrap());
        let registries = Arc::new(Registries::new(RegistrationPolicy::Overwrite));
        let mut handler = EventHandler::new(".");
        let report = ModuleLoader::new(registries.clone(), locale.clone())
            .disable(disabled.iter().copied())
            .load(builtin_manifest(), &mut handler);
        Self {
            handler,
            registries,
            locale,
            report,
        }
    }

    /// Dispatches an outgoing message in a group and returns the last edit.
    pub async fn run(&self, mock: &Arc<MockTransport>, text: &str) -> Option<String> {
        self.run_in(mock, group_chat(), text).await
    }

    pub async fn run_in(
        &self,
        mock: &Arc<MockTransport>,
        chat: Chat,
        text: &str,
    ) -> Option<String> {
        let transport: Arc<dyn Transport> = mock.clone();
        self.handler.dispatch(outgoing(chat, text), &transport).await;
        mock.last_edit()
    }
}

pub fn group_chat() -> Chat {
    Chat {
        id: -100777,
        kind: ChatKind::Supergroup,
        title: Some("Rustaceans".to_string()),
    }
}

pub fn private_chat() -> Chat {
    Chat {
        id: 555,
        kind: ChatKind::Private,
        title: None,
    }
}

pub fn outgoing(chat: Chat, content: &str) -> Message {
    Message {
        id: "7".to_string(),
        user: User {
            id: 555,
            username: Some("me".to_string()),
            first_name: Some("Me".to_string()),
            last_name: None,
        },
        chat,
        content: content.to_string(),
        direction: MessageDirection::Outgoing,
        created_at: Utc::now(),
        reply_to_message_id: None,
        reply_to_message_content: None,
    }
}
