//! Processes a [`ModuleManifest`] into an [`EventHandler`] and the [`Registries`].

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{error, info, instrument};
use ubot_i18n::LocaleState;

use crate::error::{DispatchError, RegistryError};
use crate::handler::EventHandler;
use crate::module::{ModuleContext, ModuleManifest};
use crate::registry::{RegistrationPolicy, Registries};

/// Result of one loading pass, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    /// Modules listed as disabled in the configuration.
    pub skipped: Vec<String>,
    /// Module id and the reason it was not loaded.
    pub failed: Vec<(String, String)>,
}

/// Calls each module's registration in manifest order and commits what it declared.
///
/// A module is committed all-or-nothing: if `register` fails, or committing would violate the
/// registration policy, none of its commands or metadata become visible and loading goes on
/// with the next module.
pub struct ModuleLoader {
    registries: Arc<Registries>,
    locale: Arc<LocaleState>,
    disabled: HashSet<String>,
}

impl ModuleLoader {
    pub fn new(registries: Arc<Registries>, locale: Arc<LocaleState>) -> Self {
        Self {
            registries,
            locale,
            disabled: HashSet::new(),
        }
    }

    /// Module ids to skip.
    pub fn disable<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(ids.into_iter().map(Into::into));
        self
    }

    #[instrument(skip_all, fields(modules = manifest.len()))]
    pub fn load(&self, manifest: ModuleManifest, handler: &mut EventHandler) -> LoadReport {
        let mut report = LoadReport::default();

        for module in manifest.into_modules() {
            let id = module.id().to_string();
            if self.disabled.contains(&id) {
                info!(module = %id, "Module disabled by configuration, skipped");
                report.skipped.push(id);
                continue;
            }

            let mut ctx = ModuleContext::new(
                &id,
                handler.prefix(),
                self.registries.clone(),
                self.locale.clone(),
            );
            let outcome = module
                .register(&mut ctx)
                .and_then(|()| self.commit(ctx, handler).map_err(anyhow::Error::from));

            match outcome {
                Ok(commands) => {
                    info!(module = %id, commands = commands, "Module loaded");
                    report.loaded.push(id);
                }
                Err(e) => {
                    error!(module = %id, error = ?e, "Module failed to load");
                    report.failed.push((id, format!("{:#}", e)));
                }
            }
        }

        info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Module loading finished"
        );
        report
    }

    /// Returns the number of commands added to `handler`.
    fn commit(
        &self,
        ctx: ModuleContext,
        handler: &mut EventHandler,
    ) -> Result<usize, DispatchError> {
        if self.registries.policy() == RegistrationPolicy::Strict {
            self.check_conflicts(&ctx, handler)?;
        }

        let ModuleContext {
            descriptor,
            commands,
            ..
        } = ctx;

        if let Some(description) = &descriptor.description {
            self.registries
                .register_module_desc(&descriptor.id, description.clone())?;
        }
        for (command, usage) in &descriptor.usages {
            self.registries
                .register_cmd_usage(command, usage.args.clone(), usage.usage.clone())?;
            self.registries.register_command_owner(command, &descriptor.id);
        }
        if let Some(info) = &descriptor.info {
            self.registries.register_module_info(
                &descriptor.id,
                info.name.clone(),
                info.authors.clone(),
                info.version.clone(),
            )?;
        }

        let count = commands.len();
        for (matcher, callback) in commands {
            self.registries.register_command_owner(matcher.name(), &descriptor.id);
            handler.add(matcher, callback);
        }
        Ok(count)
    }

    fn check_conflicts(
        &self,
        ctx: &ModuleContext,
        handler: &EventHandler,
    ) -> Result<(), RegistryError> {
        let id = ctx.module_id();
        if self.registries.is_registered(id) {
            return Err(RegistryError::Duplicate {
                kind: "module",
                key: id.to_string(),
            });
        }
        let mut seen = HashSet::new();
        for name in ctx.staged_commands() {
            if handler.has_command(name) || !seen.insert(name) {
                return Err(RegistryError::Duplicate {
                    kind: "command",
                    key: name.to_string(),
                });
            }
        }
        if let Some(command) = ctx
            .descriptor()
            .usages
            .keys()
            .find(|command| self.registries.has_usage(command))
        {
            return Err(RegistryError::Duplicate {
                kind: "command usage",
                key: command.clone(),
            });
        }
        Ok(())
    }
}

// Loading behaviour is covered in tests/loader_test.rs
