//! Process-wide registries read by help and introspection commands.

use dashmap::DashMap;
use tracing::warn;
use ubot_i18n::LocalizedText;

use crate::error::RegistryError;

/// Argument hint and usage text of one command, rendered in the current locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandUsage {
    pub args: Option<String>,
    pub usage: String,
}

/// Stored form of a [`CommandUsage`]; rendered on every read.
#[derive(Debug, Clone)]
pub struct UsageText {
    pub args: Option<LocalizedText>,
    pub usage: LocalizedText,
}

impl UsageText {
    pub fn resolve(&self) -> CommandUsage {
        CommandUsage {
            args: self.args.as_ref().map(LocalizedText::resolve),
            usage: self.usage.resolve(),
        }
    }
}

/// Name, authors and version of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: String,
    pub authors: String,
    pub version: String,
}

/// What happens when a key is registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationPolicy {
    /// Last writer wins; the shadowed entry is logged.
    #[default]
    Overwrite,
    /// The second registration is rejected with [`RegistryError::Duplicate`].
    Strict,
}

/// Module descriptions, command usages and module metadata.
///
/// Descriptions and usages are kept as [`LocalizedText`] and rendered when read, so a locale
/// switch applies to them too. Writes are insert-or-replace. The maps are sharded-locked, so
/// registration may overlap with reads from dispatched commands.
#[derive(Debug, Default)]
pub struct Registries {
    policy: RegistrationPolicy,
    descriptions: DashMap<String, LocalizedText>,
    usages: DashMap<String, UsageText>,
    infos: DashMap<String, ModuleInfo>,
    command_owners: DashMap<String, String>,
}

impl Registries {
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    pub fn register_module_desc(
        &self,
        module_id: &str,
        text: impl Into<LocalizedText>,
    ) -> Result<(), RegistryError> {
        self.check_vacant("module description", &self.descriptions, module_id)?;
        self.descriptions.insert(module_id.to_string(), text.into());
        Ok(())
    }

    pub fn register_cmd_usage(
        &self,
        command: &str,
        args: Option<LocalizedText>,
        usage: impl Into<LocalizedText>,
    ) -> Result<(), RegistryError> {
        self.check_vacant("command usage", &self.usages, command)?;
        self.usages.insert(
            command.to_string(),
            UsageText {
                args,
                usage: usage.into(),
            },
        );
        Ok(())
    }

    pub fn register_module_info(
        &self,
        module_id: &str,
        name: impl Into<String>,
        authors: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.check_vacant("module info", &self.infos, module_id)?;
        self.infos.insert(
            module_id.to_string(),
            ModuleInfo {
                name: name.into(),
                authors: authors.into(),
                version: version.into(),
            },
        );
        Ok(())
    }

    /// Records which module a command belongs to (for per-module listings).
    pub fn register_command_owner(&self, command: &str, module_id: &str) {
        self.command_owners
            .insert(command.to_string(), module_id.to_string());
    }

    pub fn module_desc(&self, module_id: &str) -> Option<String> {
        let text = self.descriptions.get(module_id)?.value().clone();
        Some(text.resolve())
    }

    pub fn cmd_usage(&self, command: &str) -> Option<CommandUsage> {
        let usage = self.usages.get(command)?.value().clone();
        Some(usage.resolve())
    }

    pub fn module_info(&self, module_id: &str) -> Option<ModuleInfo> {
        self.infos.get(module_id).map(|i| i.value().clone())
    }

    /// Ids of every module that registered a description or info, sorted.
    pub fn modules(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .descriptions
            .iter()
            .map(|e| e.key().clone())
            .chain(self.infos.iter().map(|e| e.key().clone()))
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Commands owned by `module_id` with their usage entry, sorted by name.
    pub fn commands_of(&self, module_id: &str) -> Vec<(String, Option<CommandUsage>)> {
        let mut commands: Vec<String> = self
            .command_owners
            .iter()
            .filter(|e| e.value() == module_id)
            .map(|e| e.key().clone())
            .collect();
        commands.sort();
        commands
            .into_iter()
            .map(|command| {
                let usage = self.cmd_usage(&command);
                (command, usage)
            })
            .collect()
    }

    pub fn is_registered(&self, module_id: &str) -> bool {
        self.descriptions.contains_key(module_id) || self.infos.contains_key(module_id)
    }

    pub fn has_usage(&self, command: &str) -> bool {
        self.usages.contains_key(command)
    }

    fn check_vacant<V>(
        &self,
        kind: &'static str,
        map: &DashMap<String, V>,
        key: &str,
    ) -> Result<(), RegistryError> {
        if !map.contains_key(key) {
            return Ok(());
        }
        match self.policy {
            RegistrationPolicy::Strict => Err(RegistryError::Duplicate {
                kind,
                key: key.to_string(),
            }),
            RegistrationPolicy::Overwrite => {
                warn!(kind = %kind, key = %key, "Registration overwrites existing entry");
                Ok(())
            }
        }
    }
}
