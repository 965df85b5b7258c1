use thiserror::Error;
use ubot_i18n::I18nError;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid trigger prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Language pack error: {0}")]
    I18n(#[from] I18nError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{kind} '{key}' is already registered")]
    Duplicate { kind: &'static str, key: String },
}
