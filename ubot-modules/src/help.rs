//! `mods`, `usage` and `modinfo`: read-only views over the registries.

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use ubot_dispatch::{
    CommandEvent, CommandHandler, CommandSpec, CommandUsage, ModuleContext, Registries,
    UbotModule,
};
use ubot_i18n::TextResolver;

use crate::{language_pack, AUTHORS, VERSION};

pub struct HelpModule;

impl UbotModule for HelpModule {
    fn id(&self) -> &str {
        "help"
    }

    fn register(&self, ctx: &mut ModuleContext) -> anyhow::Result<()> {
        let texts = ctx.texts(language_pack(self.id(), include_str!("lang/help.json"))?)?;
        let help = Help {
            texts: texts.clone(),
            registries: ctx.registries(),
            prefix: ctx.prefix().to_string(),
        };

        ctx.on(CommandSpec::new("mods").outgoing(), ListModules(help.clone()))?;
        ctx.on(
            CommandSpec::new("usage").requires_args().outgoing(),
            ShowUsage(help.clone()),
        )?;
        ctx.on(
            CommandSpec::new("modinfo").requires_args().outgoing(),
            ShowModuleInfo(help),
        )?;

        ctx.describe(texts.text("desc")?);
        ctx.usage("mods", None, texts.text("mods_usage")?);
        ctx.usage("usage", Some(texts.text("command_arg")?), texts.text("usage_usage")?);
        ctx.usage("modinfo", Some(texts.text("module_arg")?), texts.text("modinfo_usage")?);
        ctx.info("Help", AUTHORS, VERSION);
        Ok(())
    }
}

#[derive(Clone)]
struct Help {
    texts: TextResolver,
    registries: Arc<Registries>,
    prefix: String,
}

impl Help {
    /// `.cmd <args>` line.
    fn synopsis(&self, command: &str, usage: Option<&CommandUsage>) -> String {
        match usage.and_then(|u| u.args.as_deref()) {
            Some(args) => format!("{}{} {}", self.prefix, command, args),
            None => format!("{}{}", self.prefix, command),
        }
    }
}

struct ListModules(Help);

#[async_trait]
impl CommandHandler for ListModules {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let help = &self.0;
        let modules = help.registries.modules();
        if modules.is_empty() {
            let text = help.texts.resolve("no_modules")?;
            event.edit(&text).await?;
            return Ok(());
        }

        let mut text = help.texts.resolve("mods_header")?;
        text.push('\n');
        for id in modules {
            let description = match help.registries.module_desc(&id) {
                Some(description) => description,
                None => help.texts.resolve("no_description")?,
            };
            let _ = write!(text, "\n• {}: {}", id, description);
        }
        event.edit(&text).await?;
        Ok(())
    }
}

struct ShowUsage(Help);

#[async_trait]
impl CommandHandler for ShowUsage {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let help = &self.0;
        let requested = event.args().trim();
        let command = requested.strip_prefix(help.prefix.as_str()).unwrap_or(requested);

        let Some(usage) = help.registries.cmd_usage(command) else {
            let text = help.texts.format("unknown_command", &[&command])?;
            event.edit(&text).await?;
            return Ok(());
        };

        let text = format!(
            "{}\n{}\n\n{}",
            help.texts.format("usage_header", &[&command])?,
            help.synopsis(command, Some(&usage)),
            usage.usage
        );
        event.edit(&text).await?;
        Ok(())
    }
}

struct ShowModuleInfo(Help);

#[async_trait]
impl CommandHandler for ShowModuleInfo {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        let help = &self.0;
        let module = event.args().trim();

        let Some(info) = help.registries.module_info(module) else {
            let text = help.texts.format("unknown_module", &[&module])?;
            event.edit(&text).await?;
            return Ok(());
        };

        let mut text = help
            .texts
            .format("modinfo", &[&info.name, &info.authors, &info.version])?;
        let commands = help.registries.commands_of(module);
        if !commands.is_empty() {
            text.push_str("\n\n");
            text.push_str(&help.texts.resolve("commands_header")?);
            for (command, usage) in &commands {
                let _ = write!(text, "\n{}", help.synopsis(command, usage.as_ref()));
            }
        }
        event.edit(&text).await?;
        Ok(())
    }
}
