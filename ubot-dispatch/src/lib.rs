//! # ubot-dispatch
//!
//! Command modules and their dispatch: [`CommandSpec`] compiled by [`CommandMatcher`] into a
//! message predicate, [`EventHandler`] fanning every message out to all matching callbacks with
//! per-callback fault isolation, the [`Registries`] for help texts and module metadata, and the
//! [`ModuleLoader`] that processes an explicit [`ModuleManifest`].

mod error;
mod event;
mod handler;
mod loader;
mod matcher;
mod module;
mod registry;
mod spec;
mod stream;

pub use error::{DispatchError, RegistryError};
pub use event::CommandEvent;
pub use handler::{CommandHandler, DispatchReport, EventHandler};
pub use loader::{LoadReport, ModuleLoader};
pub use matcher::CommandMatcher;
pub use module::{ModuleContext, ModuleDescriptor, ModuleManifest, UbotModule};
pub use registry::{CommandUsage, ModuleInfo, RegistrationPolicy, Registries, UsageText};
pub use spec::{CommandSpec, MessagePredicate};
pub use stream::{message_stream, run_dispatch_loop, MessageSender, MessageStream};

/// Prefix that introduces a command when none is configured.
pub const DEFAULT_TRIGGER_PREFIX: &str = ".";
