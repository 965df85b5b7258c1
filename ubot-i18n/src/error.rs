use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Module {module}: text '{key}' has no '{locale}' variant")]
    MissingDefault {
        module: String,
        key: String,
        locale: String,
    },

    #[error("Module {module}: unknown text key '{key}'")]
    UnknownKey { module: String, key: String },

    #[error("Module {module}: invalid language pack: {reason}")]
    InvalidPack { module: String, reason: String },
}
