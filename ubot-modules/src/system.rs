//! `ping` and `status`.

use std::sync::Arc;

use async_trait::async_trait;
use ubot_dispatch::{
    CommandEvent, CommandHandler, CommandSpec, ModuleContext, Registries, UbotModule,
};
use ubot_i18n::TextResolver;

use crate::{language_pack, AUTHORS, PROJECT, VERSION};

pub struct SystemModule;

impl UbotModule for SystemModule {
    fn id(&self) -> &str {
        "system"
    }

    fn register(&self, ctx: &mut ModuleContext) -> anyhow::Result<()> {
        let texts = ctx.texts(language_pack(self.id(), include_str!("lang/system.json"))?)?;

        ctx.on(
            CommandSpec::new("ping").outgoing(),
            Ping {
                texts: texts.clone(),
            },
        )?;
        ctx.on(
            CommandSpec::new("status").outgoing(),
            Status {
                texts: texts.clone(),
                registries: ctx.registries(),
            },
        )?;

        ctx.describe(texts.text("desc")?);
        ctx.usage("ping", None, texts.text("ping_usage")?);
        ctx.usage("status", None, texts.text("status_usage")?);
        ctx.info("System", AUTHORS, VERSION);
        Ok(())
    }
}

struct Ping {
    texts: TextResolver,
}

#[async_trait]
impl CommandHandler for Ping {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let text = self.texts.resolve("pong")?;
        event.edit(&text).await?;
        Ok(())
    }
}

struct Status {
    texts: TextResolver,
    registries: Arc<Registries>,
}

#[async_trait]
impl CommandHandler for Status {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let modules = self.registries.modules().len();
        let locale = self.texts.current_locale_code();
        let text = self
            .texts
            .format("status", &[&PROJECT, &VERSION, &modules, &locale])?;
        event.edit(&text).await?;
        Ok(())
    }
}
