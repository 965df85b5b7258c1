//! `chatid` and `link`.

use async_trait::async_trait;
use tracing::warn;
use ubot_core::UbotError;
use ubot_dispatch::{CommandEvent, CommandHandler, CommandSpec, ModuleContext, UbotModule};
use ubot_i18n::TextResolver;

use crate::{language_pack, AUTHORS, VERSION};

pub struct ChatInfoModule;

impl UbotModule for ChatInfoModule {
    fn id(&self) -> &str {
        "chatinfo"
    }

    fn register(&self, ctx: &mut ModuleContext) -> anyhow::Result<()> {
        let texts = ctx.texts(language_pack(self.id(), include_str!("lang/chatinfo.json"))?)?;

        ctx.on(
            CommandSpec::new("chatid").outgoing(),
            ChatId {
                texts: texts.clone(),
            },
        )?;
        ctx.on(
            CommandSpec::new("link").outgoing(),
            InviteLink {
                texts: texts.clone(),
            },
        )?;

        ctx.describe(texts.text("desc")?);
        ctx.usage("chatid", None, texts.text("chatid_usage")?);
        ctx.usage("link", None, texts.text("link_usage")?);
        ctx.info("Chat Info", AUTHORS, VERSION);
        Ok(())
    }
}

struct ChatId {
    texts: TextResolver,
}

#[async_trait]
impl CommandHandler for ChatId {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let chat = event.chat();
        let text = if chat.is_group_like() {
            self.texts.format("chat_id", &[&chat.id])?
        } else {
            self.texts.resolve("not_a_group")?
        };
        event.edit(&text).await?;
        Ok(())
    }
}

struct InviteLink {
    texts: TextResolver,
}

#[async_trait]
impl CommandHandler for InviteLink {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let chat = event.chat();
        if !chat.is_group_like() {
            let text = self.texts.resolve("not_a_group")?;
            event.edit(&text).await?;
            return Ok(());
        }

        let text = match event.transport().export_invite_link(chat).await {
            Ok(link) => {
                let title = match &chat.title {
                    Some(title) => title.clone(),
                    None => self.texts.resolve("untitled")?,
                };
                self.texts.format("link", &[&title, &link])?
            }
            Err(UbotError::AdminRequired(_)) => self.texts.resolve("no_admin_perm")?,
            Err(e) => {
                warn!(chat_id = chat.id, error = %e, "Invite link export failed");
                self.texts.resolve("unable_get_link")?
            }
        };
        event.edit(&text).await?;
        Ok(())
    }
}
