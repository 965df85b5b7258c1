//! # ubot-i18n
//!
//! Language-pack resolution: a process-wide [`LocaleState`], one [`Catalog`] of text templates
//! per module, and [`TextResolver`] handles that look texts up against the locale selected at
//! call time.

mod catalog;
mod error;
mod locale;
mod resolver;
mod text;

pub use catalog::Catalog;
pub use error::I18nError;
pub use locale::{LocaleState, DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use resolver::{fill, FormatArg, TextResolver};
pub use text::LocalizedText;
