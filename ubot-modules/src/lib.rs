//! # ubot-modules
//!
//! Built-in modules. Each registers its commands, usage texts and metadata through a
//! [`ubot_dispatch::ModuleContext`] and resolves every user-facing string through its own
//! language pack (`src/lang/<module>.json`).

mod chatinfo;
mod help;
mod language;
mod system;

pub use chatinfo::ChatInfoModule;
pub use help::HelpModule;
pub use language::LanguageModule;
pub use system::SystemModule;

use anyhow::Context;
use ubot_dispatch::ModuleManifest;
use ubot_i18n::Catalog;

pub const PROJECT: &str = "ubot";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = "ubot contributors";

/// Built-in modules in load order.
pub fn builtin_manifest() -> ModuleManifest {
    ModuleManifest::new()
        .with(SystemModule)
        .with(HelpModule)
        .with(LanguageModule)
        .with(ChatInfoModule)
}

fn language_pack(module: &str, json: &str) -> anyhow::Result<Catalog> {
    Catalog::from_json(module, json)
        .with_context(|| format!("Failed to parse language pack of module {}", module))
}
