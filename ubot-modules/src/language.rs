//! `lang` and `setlang`: the only writer of the shared locale.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use ubot_dispatch::{CommandEvent, CommandHandler, CommandSpec, ModuleContext, UbotModule};
use ubot_i18n::{LocaleState, TextResolver};

use crate::{language_pack, AUTHORS, VERSION};

pub struct LanguageModule;

impl UbotModule for LanguageModule {
    fn id(&self) -> &str {
        "language"
    }

    fn register(&self, ctx: &mut ModuleContext) -> anyhow::Result<()> {
        let texts = ctx.texts(language_pack(self.id(), include_str!("lang/language.json"))?)?;

        ctx.on(
            CommandSpec::new("lang").outgoing(),
            ShowLanguage {
                texts: texts.clone(),
            },
        )?;
        ctx.on(
            CommandSpec::new("setlang").requires_args().outgoing(),
            SetLanguage {
                texts: texts.clone(),
                locale: ctx.locale(),
            },
        )?;

        ctx.describe(texts.text("desc")?);
        ctx.usage("lang", None, texts.text("lang_usage")?);
        ctx.usage("setlang", Some(texts.text("code_arg")?), texts.text("setlang_usage")?);
        ctx.info("Language", AUTHORS, VERSION);
        Ok(())
    }
}

struct ShowLanguage {
    texts: TextResolver,
}

#[async_trait]
impl CommandHandler for ShowLanguage {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let code = self.texts.current_locale_code();
        let name = self.texts.resolve("locale_name")?;
        let text = self.texts.format("current", &[&name, &code])?;
        event.edit(&text).await?;
        Ok(())
    }
}

struct SetLanguage {
    texts: TextResolver,
    locale: Arc<LocaleState>,
}

#[async_trait]
impl CommandHandler for SetLanguage {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let args: Vec<&str> = event.args().split_whitespace().collect();
        let [code] = args.as_slice() else {
            let text = self.texts.resolve("multiple_args")?;
            event.edit(&text).await?;
            return Ok(());
        };

        if self.locale.set_locale(code).is_err() {
            let supported = self.locale.supported().collect::<Vec<_>>().join(", ");
            let text = self.texts.format("unsupported", &[code, &supported])?;
            event.edit(&text).await?;
            return Ok(());
        }

        info!(locale = %code, "Language switched by command");
        // Resolved after the switch, so the confirmation is already in the new language.
        let name = self.texts.resolve("locale_name")?;
        let text = self.texts.format("changed", &[&name, code])?;
        event.edit(&text).await?;
        Ok(())
    }
}
