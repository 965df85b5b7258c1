use thiserror::Error;

#[derive(Error, Debug)]
pub enum UbotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Admin rights required in chat {0}")]
    AdminRequired(i64),

    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UbotError>;
