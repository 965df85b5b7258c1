//! Module contract: what a module declares and the context it declares it through.

use std::collections::BTreeMap;
use std::sync::Arc;

use ubot_i18n::{Catalog, LocaleState, LocalizedText, TextResolver};

use crate::error::DispatchError;
use crate::handler::CommandHandler;
use crate::matcher::CommandMatcher;
use crate::registry::{ModuleInfo, Registries, UsageText};
use crate::spec::CommandSpec;

/// An independently authored unit contributing commands and metadata.
pub trait UbotModule: Send + Sync {
    /// Unique module id (used as registry key and in `NOT_LOAD_MODULES`).
    fn id(&self) -> &str;

    /// Declares commands and metadata. Called exactly once, during loading.
    fn register(&self, ctx: &mut ModuleContext) -> anyhow::Result<()>;
}

/// Everything one module declared, staged until the module finished registering.
#[derive(Debug, Clone, Default)]
pub struct ModuleDescriptor {
    pub id: String,
    pub description: Option<LocalizedText>,
    pub usages: BTreeMap<String, UsageText>,
    pub info: Option<ModuleInfo>,
}

/// Handed to [`UbotModule::register`]. Nothing becomes visible to dispatch or to the
/// registries until the loader commits the module.
pub struct ModuleContext {
    prefix: String,
    registries: Arc<Registries>,
    locale: Arc<LocaleState>,
    pub(crate) descriptor: ModuleDescriptor,
    pub(crate) commands: Vec<(CommandMatcher, Arc<dyn CommandHandler>)>,
}

impl ModuleContext {
    pub fn new(
        module_id: &str,
        prefix: impl Into<String>,
        registries: Arc<Registries>,
        locale: Arc<LocaleState>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            registries,
            locale,
            descriptor: ModuleDescriptor {
                id: module_id.to_string(),
                ..ModuleDescriptor::default()
            },
            commands: Vec::new(),
        }
    }

    pub fn module_id(&self) -> &str {
        &self.descriptor.id
    }

    /// Trigger prefix commands are matched with (for usage texts).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Binds this module's language pack to the shared locale; rejects packs with a key
    /// lacking the default-locale variant.
    pub fn texts(&self, catalog: Catalog) -> Result<TextResolver, DispatchError> {
        Ok(TextResolver::new(self.locale.clone(), catalog)?)
    }

    pub fn registries(&self) -> Arc<Registries> {
        self.registries.clone()
    }

    pub fn locale(&self) -> Arc<LocaleState> {
        self.locale.clone()
    }

    /// Stages a command. `spec` is validated immediately.
    pub fn on<H>(&mut self, spec: CommandSpec, callback: H) -> Result<(), DispatchError>
    where
        H: CommandHandler + 'static,
    {
        let matcher = CommandMatcher::compile(&self.prefix, spec)?;
        self.commands.push((matcher, Arc::new(callback)));
        Ok(())
    }

    /// Pass [`TextResolver::text`] values to have the text follow the locale.
    pub fn describe(&mut self, text: impl Into<LocalizedText>) {
        self.descriptor.description = Some(text.into());
    }

    pub fn usage(
        &mut self,
        command: &str,
        args: Option<LocalizedText>,
        usage: impl Into<LocalizedText>,
    ) {
        self.descriptor.usages.insert(
            command.to_string(),
            UsageText {
                args,
                usage: usage.into(),
            },
        );
    }

    pub fn info(
        &mut self,
        name: impl Into<String>,
        authors: impl Into<String>,
        version: impl Into<String>,
    ) {
        self.descriptor.info = Some(ModuleInfo {
            name: name.into(),
            authors: authors.into(),
            version: version.into(),
        });
    }

    /// Names of the commands staged so far.
    pub fn staged_commands(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|(matcher, _)| matcher.name())
    }

    pub fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }
}

/// Ordered list of modules to load. Load order is list order.
#[derive(Default)]
pub struct ModuleManifest {
    modules: Vec<Box<dyn UbotModule>>,
}

impl ModuleManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<M>(mut self, module: M) -> Self
    where
        M: UbotModule + 'static,
    {
        self.modules.push(Box::new(module));
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub(crate) fn into_modules(self) -> Vec<Box<dyn UbotModule>> {
        self.modules
    }
}
